use crate::alignment_mode::{AlignConfig, FreeEndGaps};
use crate::traceback::{TracebackConfig, TracebackMode};
use crate::AlignError;

/// Diagonal window `lower..=upper`, where the diagonal of cell (v, h) is `h - v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagonalRange {
    lower: isize,
    upper: isize,
}

impl DiagonalRange {
    pub fn lower(&self) -> isize {
        self.lower
    }

    pub fn upper(&self) -> isize {
        self.upper
    }

    pub fn contains(&self, diagonal: isize) -> bool {
        self.lower <= diagonal && diagonal <= self.upper
    }

    /// True when the band shares a diagonal with `first..=last`.
    pub fn overlaps(&self, first: isize, last: isize) -> bool {
        self.lower <= last && first <= self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Band {
    #[default]
    Unbounded,
    Bounded(DiagonalRange),
}

impl Band {
    pub fn new(lower: isize, upper: isize) -> Result<Self, AlignError> {
        if lower > upper {
            return Err(AlignError::InvalidBand { lower, upper });
        }
        Ok(Band::Bounded(DiagonalRange { lower, upper }))
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, Band::Bounded(_))
    }

    /// Checks that the band reaches the cells an alignment must pass through.
    ///
    /// Every band has to overlap the matrix. Global alignments also need the
    /// start cell (diagonal 0) and the end cell (diagonal `len_h - len_v`).
    /// A free leading or trailing edge widens that corner to the diagonals
    /// of the whole edge.
    pub(crate) fn check_reachable(
        &self,
        global: bool,
        free: FreeEndGaps,
        len_h: usize,
        len_v: usize,
    ) -> Result<(), AlignError> {
        let range = match self {
            Band::Unbounded => return Ok(()),
            Band::Bounded(range) => range,
        };
        let (len_h, len_v) = (len_h as isize, len_v as isize);

        if !range.overlaps(-len_v, len_h) {
            return Err(AlignError::BandOutsideMatrix {
                lower: range.lower,
                upper: range.upper,
            });
        }
        if !global {
            return Ok(());
        }

        let end = len_h - len_v;
        let corners = [
            (
                Corner::Start,
                if free.first_column { -len_v } else { 0 },
                if free.first_row { len_h } else { 0 },
            ),
            (
                Corner::End,
                if free.last_row { -len_v } else { end },
                if free.last_column { len_h } else { end },
            ),
        ];
        for (corner, first, last) in corners {
            if !range.overlaps(first, last) {
                return Err(AlignError::BandExcludesCorner {
                    corner,
                    first,
                    last,
                    lower: range.lower,
                    upper: range.upper,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Start,
    End,
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Corner::Start => f.write_str("start"),
            Corner::End => f.write_str("end"),
        }
    }
}

/// Per-call alignment options.
///
/// Defaults: no free end gaps, SingleTrace traceback with gaps left, no band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignOptions {
    end_gaps: AlignConfig,
    traceback: TracebackMode,
    band: Band,
}

impl AlignOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with traceback disabled; only the score is computed.
    pub fn score_only() -> Self {
        Self::default().without_traceback()
    }

    pub fn with_end_gaps(mut self, end_gaps: AlignConfig) -> Self {
        self.end_gaps = end_gaps;
        self
    }

    pub fn with_traceback(mut self, config: TracebackConfig) -> Self {
        self.traceback = TracebackMode::On(config);
        self
    }

    pub fn without_traceback(mut self) -> Self {
        self.traceback = TracebackMode::Off;
        self
    }

    pub fn with_band(mut self, lower: isize, upper: isize) -> Result<Self, AlignError> {
        self.band = Band::new(lower, upper)?;
        Ok(self)
    }

    pub fn end_gaps(&self) -> AlignConfig {
        self.end_gaps
    }

    pub fn traceback(&self) -> TracebackMode {
        self.traceback
    }

    pub fn band(&self) -> Band {
        self.band
    }
}
