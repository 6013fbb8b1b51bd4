#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraceKind {
    /// One optimal path.
    #[default]
    SingleTrace,
    /// Every co-optimal path.
    CompleteTrace,
}

/// Tie-break between co-optimal paths: place gaps as far left or right as possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GapsPlacement {
    #[default]
    GapsLeft,
    GapsRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TracebackConfig {
    pub kind: TraceKind,
    pub gaps: GapsPlacement,
}

impl TracebackConfig {
    pub const fn new(kind: TraceKind, gaps: GapsPlacement) -> Self {
        Self { kind, gaps }
    }

    /// SingleTrace with gaps placed left.
    pub const fn single_gaps_left() -> Self {
        Self::new(TraceKind::SingleTrace, GapsPlacement::GapsLeft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TracebackMode {
    Off,
    On(TracebackConfig),
}

impl Default for TracebackMode {
    fn default() -> Self {
        TracebackMode::On(TracebackConfig::default())
    }
}

impl TracebackMode {
    pub fn is_on(&self) -> bool {
        matches!(self, TracebackMode::On(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceDirection {
    Diagonal,
    /// Gap in the vertical sequence.
    Horizontal,
    /// Gap in the horizontal sequence.
    Vertical,
}

/// A maximal run of identical moves through the DP matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSegment {
    pub h_begin: usize,
    pub v_begin: usize,
    pub length: usize,
    pub direction: TraceDirection,
}

impl TraceSegment {
    pub fn new(h_begin: usize, v_begin: usize, length: usize, direction: TraceDirection) -> Self {
        Self {
            h_begin,
            v_begin,
            length,
            direction,
        }
    }

    pub fn h_end(&self) -> usize {
        match self.direction {
            TraceDirection::Diagonal | TraceDirection::Horizontal => self.h_begin + self.length,
            TraceDirection::Vertical => self.h_begin,
        }
    }

    pub fn v_end(&self) -> usize {
        match self.direction {
            TraceDirection::Diagonal | TraceDirection::Vertical => self.v_begin + self.length,
            TraceDirection::Horizontal => self.v_begin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_single_trace_gaps_left() {
        assert_eq!(
            TracebackMode::default(),
            TracebackMode::On(TracebackConfig::single_gaps_left())
        );
        assert!(!TracebackMode::Off.is_on());
    }

    #[test]
    fn test_segment_ends() {
        let diagonal = TraceSegment::new(2, 3, 4, TraceDirection::Diagonal);
        assert_eq!((diagonal.h_end(), diagonal.v_end()), (6, 7));

        let horizontal = TraceSegment::new(2, 3, 4, TraceDirection::Horizontal);
        assert_eq!((horizontal.h_end(), horizontal.v_end()), (6, 3));

        let vertical = TraceSegment::new(2, 3, 4, TraceDirection::Vertical);
        assert_eq!((vertical.h_end(), vertical.v_end()), (2, 7));
    }
}
