use std::fmt::Debug;

// DNA defaults, given as penalties
pub const DNA_MATCH: i32 = 1;
pub const DNA_MISMATCH: i32 = -3;
pub const DNA_GAP_OPEN: i32 = 3;
pub const DNA_GAP_EXT: i32 = 2;
pub const DNA_GAP_FIRST: i32 = DNA_GAP_EXT + DNA_GAP_OPEN;

/// Read-only view of a scoring model.
///
/// Gap costs are looked up per sequence entry so that position-specific
/// models can vary them along a sequence. An entry is obtained with
/// [`ScoringScheme::sequence_entry`] and is whatever the model needs to
/// score that position (a residue, a profile column, ...).
pub trait ScoringScheme {
    type Value: Copy + PartialEq + Debug;
    type Entry: Copy;

    fn sequence_entry(&self, seq: &[u8], position: usize) -> Self::Entry;

    fn gap_open_horizontal(&self, h: Self::Entry, v: Self::Entry) -> Self::Value;
    fn gap_extend_horizontal(&self, h: Self::Entry, v: Self::Entry) -> Self::Value;
    fn gap_open_vertical(&self, h: Self::Entry, v: Self::Entry) -> Self::Value;
    fn gap_extend_vertical(&self, h: Self::Entry, v: Self::Entry) -> Self::Value;

    fn substitution(&self, h: Self::Entry, v: Self::Entry) -> Self::Value;
}

/// Match/mismatch scoring with one gap-open and one gap-extend score.
///
/// Scores are signed: gaps and mismatches are negative. `gap_open` is the
/// score of the first position of a gap, `gap_extend` of every further one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleScore {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap_open: i32,
    pub gap_extend: i32,
}

impl Default for SimpleScore {
    fn default() -> Self {
        Self {
            match_score: DNA_MATCH,
            mismatch: DNA_MISMATCH,
            gap_open: -DNA_GAP_FIRST,
            gap_extend: -DNA_GAP_EXT,
        }
    }
}

impl SimpleScore {
    pub fn new(match_score: i32, mismatch: i32, gap_open: i32, gap_extend: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap_open,
            gap_extend,
        }
    }

    /// Same score for opening and extending a gap.
    pub fn linear(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self::new(match_score, mismatch, gap, gap)
    }
}

impl ScoringScheme for SimpleScore {
    type Value = i32;
    type Entry = u8;

    fn sequence_entry(&self, seq: &[u8], position: usize) -> u8 {
        seq[position]
    }

    fn gap_open_horizontal(&self, _h: u8, _v: u8) -> i32 {
        self.gap_open
    }

    fn gap_extend_horizontal(&self, _h: u8, _v: u8) -> i32 {
        self.gap_extend
    }

    fn gap_open_vertical(&self, _h: u8, _v: u8) -> i32 {
        self.gap_open
    }

    fn gap_extend_vertical(&self, _h: u8, _v: u8) -> i32 {
        self.gap_extend
    }

    fn substitution(&self, h: u8, v: u8) -> i32 {
        if h.eq_ignore_ascii_case(&v) {
            self.match_score
        } else {
            self.mismatch
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapCostModel {
    Linear,
    Affine,
}

impl GapCostModel {
    /// Classifies `scoring` for the pair `seq_h`/`seq_v`.
    pub fn classify<S: ScoringScheme>(scoring: &S, seq_h: &[u8], seq_v: &[u8]) -> Self {
        if uses_affine_gaps(scoring, seq_h, seq_v) {
            GapCostModel::Affine
        } else {
            GapCostModel::Linear
        }
    }
}

/// True when gap open and gap extend differ in either direction.
///
/// Only the first entry of each sequence is sampled. A model whose
/// open/extend equality changes further along a sequence is classified by
/// that first position alone.
///
/// # Panics
///
/// Panics if either sequence is empty.
pub fn uses_affine_gaps<S: ScoringScheme>(scoring: &S, seq_h: &[u8], seq_v: &[u8]) -> bool {
    assert!(!seq_h.is_empty(), "horizontal sequence must not be empty");
    assert!(!seq_v.is_empty(), "vertical sequence must not be empty");

    let h = scoring.sequence_entry(seq_h, 0);
    let v = scoring.sequence_entry(seq_v, 0);

    let horizontal = scoring.gap_extend_horizontal(h, v) != scoring.gap_open_horizontal(h, v);
    let vertical = scoring.gap_extend_vertical(h, v) != scoring.gap_open_vertical(h, v);
    log::trace!(
        "gap classification: horizontal affine={}, vertical affine={}",
        horizontal,
        vertical
    );
    horizontal || vertical
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gap scores that differ per direction, looked up by residue.
    struct DirectionalScore {
        horizontal: (i32, i32),
        vertical: (i32, i32),
    }

    impl ScoringScheme for DirectionalScore {
        type Value = i32;
        type Entry = u8;

        fn sequence_entry(&self, seq: &[u8], position: usize) -> u8 {
            seq[position]
        }
        fn gap_open_horizontal(&self, _h: u8, _v: u8) -> i32 {
            self.horizontal.0
        }
        fn gap_extend_horizontal(&self, _h: u8, _v: u8) -> i32 {
            self.horizontal.1
        }
        fn gap_open_vertical(&self, _h: u8, _v: u8) -> i32 {
            self.vertical.0
        }
        fn gap_extend_vertical(&self, _h: u8, _v: u8) -> i32 {
            self.vertical.1
        }
        fn substitution(&self, h: u8, v: u8) -> i32 {
            if h == v {
                1
            } else {
                -1
            }
        }
    }

    #[test]
    fn test_equal_costs_are_linear() {
        let scoring = SimpleScore::linear(1, -1, -1);
        assert!(!uses_affine_gaps(&scoring, b"ACGT", b"AGT"));
        assert_eq!(
            GapCostModel::classify(&scoring, b"ACGT", b"AGT"),
            GapCostModel::Linear
        );
    }

    #[test]
    fn test_default_dna_scoring_is_affine() {
        let scoring = SimpleScore::default();
        assert_eq!(scoring.gap_open, -5);
        assert_eq!(
            GapCostModel::classify(&scoring, b"A", b"C"),
            GapCostModel::Affine
        );
    }

    #[test]
    fn test_single_direction_makes_affine() {
        let horizontal_only = DirectionalScore {
            horizontal: (-4, -1),
            vertical: (-2, -2),
        };
        assert!(uses_affine_gaps(&horizontal_only, b"AC", b"GT"));

        let vertical_only = DirectionalScore {
            horizontal: (-2, -2),
            vertical: (-4, -1),
        };
        assert!(uses_affine_gaps(&vertical_only, b"AC", b"GT"));
    }

    #[test]
    fn test_substitution_ignores_case() {
        let scoring = SimpleScore::linear(2, -1, -1);
        assert_eq!(scoring.substitution(b'a', b'A'), 2);
        assert_eq!(scoring.substitution(b'A', b'C'), -1);
    }

    #[test]
    #[should_panic(expected = "vertical sequence must not be empty")]
    fn test_classify_rejects_empty_sequence() {
        uses_affine_gaps(&SimpleScore::default(), b"ACGT", b"");
    }
}
