/// Row-major trace flags, one byte per cell.
#[derive(Debug, Clone, Default)]
pub struct TraceMatrix {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl TraceMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Resizes to `rows` x `cols` and zeroes every cell, reusing the allocation.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.data.clear();
        self.data.resize(rows * cols, 0);
        self.rows = rows;
        self.cols = cols;
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.cols + col] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// DP matrix storage reused across calls.
///
/// One context serves one call at a time; concurrent alignments need their
/// own contexts.
#[derive(Debug, Clone, Default)]
pub struct DpContext<V> {
    pub scores: Vec<V>,
    pub traces: TraceMatrix,
}

impl<V: Copy> DpContext<V> {
    pub fn new() -> Self {
        Self {
            scores: Vec::new(),
            traces: TraceMatrix::default(),
        }
    }

    /// Prepares storage for a `len_v + 1` by `len_h + 1` matrix filled with `init`.
    pub fn prepare(&mut self, len_h: usize, len_v: usize, init: V, with_traces: bool) {
        let (rows, cols) = (len_v + 1, len_h + 1);
        self.scores.clear();
        self.scores.resize(rows * cols, init);
        if with_traces {
            self.traces.reset(rows, cols);
        } else {
            self.traces.reset(0, 0);
        }
    }

    pub fn clear(&mut self) {
        self.scores.clear();
        self.traces.reset(0, 0);
    }
}

/// Bookkeeping carried between successive suboptimal local alignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuboptimalState {
    /// Alignments reported so far.
    pub round: usize,
    /// Cells already used by a reported alignment, row-major.
    pub masked: Vec<bool>,
}

/// Opaque engine state passed through every call.
///
/// `Inactive` is the no-op state used by single-result algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScoutState {
    #[default]
    Inactive,
    Suboptimal(SuboptimalState),
}

impl ScoutState {
    pub fn suboptimal() -> Self {
        ScoutState::Suboptimal(SuboptimalState::default())
    }

    pub fn round(&self) -> usize {
        match self {
            ScoutState::Inactive => 0,
            ScoutState::Suboptimal(state) => state.round,
        }
    }
}
