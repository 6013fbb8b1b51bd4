use std::fmt;

use crate::alignment_mode::{AlgorithmFamily, FreeEndGaps};
use crate::config::Band;
use crate::scoring::GapCostModel;
use crate::traceback::{TracebackConfig, TracebackMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalVariant {
    /// Best local alignment only.
    Optimal,
    /// Successive non-overlapping local alignments, tracked through the scout state.
    Suboptimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralProfile {
    Global { free_end_gaps: FreeEndGaps },
    Local(LocalVariant),
}

impl StructuralProfile {
    /// End-gap policy the engine applies. Local profiles have none.
    pub fn free_end_gaps(&self) -> Option<FreeEndGaps> {
        match self {
            StructuralProfile::Global { free_end_gaps } => Some(*free_end_gaps),
            StructuralProfile::Local(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignmentProfile {
    pub family: AlgorithmFamily,
    pub structure: StructuralProfile,
    pub gap_model: GapCostModel,
    pub traceback: TracebackMode,
    pub band: Band,
    /// Set when the family replaced the caller's traceback request.
    pub traceback_overridden: bool,
}

impl AlignmentProfile {
    pub fn banded(mut self, band: Band) -> Self {
        self.band = band;
        self
    }
}

impl fmt::Display for AlignmentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.structure {
            StructuralProfile::Global { free_end_gaps } => {
                let (first_row, first_column, last_row, last_column) = free_end_gaps.as_tuple();
                write!(
                    f,
                    "{}: global(free first_row={} first_column={} last_row={} last_column={})",
                    self.family, first_row, first_column, last_row, last_column
                )?;
            }
            StructuralProfile::Local(variant) => {
                write!(f, "{}: local({:?})", self.family, variant)?;
            }
        }
        write!(f, ", {:?} gaps", self.gap_model)?;
        match self.traceback {
            TracebackMode::Off => write!(f, ", traceback off")?,
            TracebackMode::On(config) => {
                write!(f, ", traceback {:?}/{:?}", config.kind, config.gaps)?
            }
        }
        if self.traceback_overridden {
            write!(f, " (forced by family)")?;
        }
        match self.band {
            Band::Unbounded => write!(f, ", unbanded"),
            Band::Bounded(range) => write!(f, ", band [{}, {}]", range.lower(), range.upper()),
        }
    }
}

/// Resolves the profile for `family`.
///
/// Global families keep `free_end_gaps` verbatim. Local families drop it.
/// WatermanEggert always traces a single path with gaps left, whatever
/// `traceback` asks for; the returned profile flags the substitution.
pub fn resolve_profile(
    family: AlgorithmFamily,
    free_end_gaps: FreeEndGaps,
    traceback: TracebackMode,
    gap_model: GapCostModel,
) -> AlignmentProfile {
    resolve_requested(family, free_end_gaps, traceback, gap_model, true)
}

/// `explicit` is false when `traceback` was filled in by a score-only entry
/// point rather than asked for by the caller.
pub(crate) fn resolve_requested(
    family: AlgorithmFamily,
    free_end_gaps: FreeEndGaps,
    traceback: TracebackMode,
    gap_model: GapCostModel,
    explicit: bool,
) -> AlignmentProfile {
    let (structure, resolved_traceback) = match family {
        AlgorithmFamily::NeedlemanWunsch | AlgorithmFamily::Gotoh => {
            (StructuralProfile::Global { free_end_gaps }, traceback)
        }
        AlgorithmFamily::SmithWaterman => {
            (StructuralProfile::Local(LocalVariant::Optimal), traceback)
        }
        AlgorithmFamily::WatermanEggert => (
            StructuralProfile::Local(LocalVariant::Suboptimal),
            TracebackMode::On(TracebackConfig::single_gaps_left()),
        ),
    };

    if !family.is_global() && !free_end_gaps.is_none() {
        log::debug!("{} ignores end-gap policy {:?}", family, free_end_gaps);
    }

    let traceback_overridden = resolved_traceback != traceback;
    if traceback_overridden && explicit {
        log::warn!(
            "{} requires single-trace gaps-left traceback; requested {:?} replaced",
            family,
            traceback
        );
    } else if traceback_overridden {
        log::debug!("{} traces internally for a score-only call", family);
    }

    let profile = AlignmentProfile {
        family,
        structure,
        gap_model,
        traceback: resolved_traceback,
        band: Band::Unbounded,
        traceback_overridden,
    };
    log::debug!("resolved profile {}", profile);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment_mode::AlignConfig;
    use crate::traceback::{GapsPlacement, TraceKind};

    #[test]
    fn test_global_families_keep_end_gaps() {
        let free = AlignConfig::new(true, false, true, false).normalize();
        for family in [AlgorithmFamily::NeedlemanWunsch, AlgorithmFamily::Gotoh] {
            let profile = resolve_profile(
                family,
                free,
                TracebackMode::default(),
                GapCostModel::Linear,
            );
            assert_eq!(
                profile.structure,
                StructuralProfile::Global {
                    free_end_gaps: free
                }
            );
            assert_eq!(profile.structure.free_end_gaps(), Some(free));
            assert!(!profile.traceback_overridden);
        }
    }

    #[test]
    fn test_smith_waterman_is_plain_local() {
        let profile = resolve_profile(
            AlgorithmFamily::SmithWaterman,
            AlignConfig::all_free().normalize(),
            TracebackMode::Off,
            GapCostModel::Affine,
        );
        assert_eq!(profile.structure, StructuralProfile::Local(LocalVariant::Optimal));
        assert_eq!(profile.structure.free_end_gaps(), None);
        assert_eq!(profile.traceback, TracebackMode::Off);
        assert_eq!(profile.gap_model, GapCostModel::Affine);
    }

    #[test]
    fn test_waterman_eggert_forces_single_trace() {
        let requested = TracebackMode::On(TracebackConfig::new(
            TraceKind::CompleteTrace,
            GapsPlacement::GapsRight,
        ));
        let profile = resolve_profile(
            AlgorithmFamily::WatermanEggert,
            FreeEndGaps::NONE,
            requested,
            GapCostModel::Linear,
        );
        assert_eq!(
            profile.structure,
            StructuralProfile::Local(LocalVariant::Suboptimal)
        );
        assert_eq!(
            profile.traceback,
            TracebackMode::On(TracebackConfig::single_gaps_left())
        );
        assert!(profile.traceback_overridden);
    }

    #[test]
    fn test_waterman_eggert_default_request_is_not_flagged() {
        let profile = resolve_profile(
            AlgorithmFamily::WatermanEggert,
            FreeEndGaps::NONE,
            TracebackMode::default(),
            GapCostModel::Linear,
        );
        assert!(!profile.traceback_overridden);
    }

    #[test]
    fn test_score_only_request_resolves_like_explicit_off() {
        let implicit = resolve_requested(
            AlgorithmFamily::WatermanEggert,
            FreeEndGaps::NONE,
            TracebackMode::Off,
            GapCostModel::Linear,
            false,
        );
        let explicit = resolve_profile(
            AlgorithmFamily::WatermanEggert,
            FreeEndGaps::NONE,
            TracebackMode::Off,
            GapCostModel::Linear,
        );
        assert_eq!(implicit, explicit);
        assert!(implicit.traceback_overridden);
    }

    #[test]
    fn test_banded_and_display() {
        let profile = resolve_profile(
            AlgorithmFamily::Gotoh,
            FreeEndGaps::NONE,
            TracebackMode::Off,
            GapCostModel::Affine,
        )
        .banded(Band::new(-2, 2).unwrap());
        assert!(profile.band.is_bounded());
        let text = profile.to_string();
        assert!(text.starts_with("gotoh: global"));
        assert!(text.ends_with("band [-2, 2]"));
    }
}
