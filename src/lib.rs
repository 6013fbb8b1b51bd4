use thiserror::Error;

pub mod alignment_mode;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod profile;
pub mod scoring;
pub mod traceback;

pub use crate::alignment_mode::{normalize_end_gaps, AlgorithmFamily, AlignConfig, FreeEndGaps};
pub use crate::config::{AlignOptions, Band, Corner, DiagonalRange};
pub use crate::context::{DpContext, ScoutState, SuboptimalState, TraceMatrix};
pub use crate::dispatch::{Aligner, DpEngine};
pub use crate::profile::{resolve_profile, AlignmentProfile, LocalVariant, StructuralProfile};
pub use crate::scoring::{uses_affine_gaps, GapCostModel, ScoringScheme, SimpleScore};
pub use crate::traceback::{
    GapsPlacement, TraceDirection, TraceKind, TraceSegment, TracebackConfig, TracebackMode,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    #[error("Invalid band: lower diagonal {lower} is above upper diagonal {upper}")]
    InvalidBand { lower: isize, upper: isize },
    #[error("Band [{lower}, {upper}] misses the {corner} cell diagonals [{first}, {last}]")]
    BandExcludesCorner {
        corner: Corner,
        first: isize,
        last: isize,
        lower: isize,
        upper: isize,
    },
    #[error("Band [{lower}, {upper}] does not overlap the DP matrix")]
    BandOutsideMatrix { lower: isize, upper: isize },
}
