use crate::alignment_mode::{AlgorithmFamily, FreeEndGaps};
use crate::config::{AlignOptions, Band};
use crate::context::{DpContext, ScoutState};
use crate::profile::{resolve_requested, AlignmentProfile};
use crate::scoring::{GapCostModel, ScoringScheme};
use crate::traceback::{TraceSegment, TracebackMode};
use crate::AlignError;

/// The matrix fill and traceback engine.
///
/// `compute` runs exactly the recurrence described by `profile` and returns
/// its score. When the profile's traceback is on, the path is appended to
/// `trace`, which the dispatcher hands over empty.
pub trait DpEngine<S: ScoringScheme> {
    fn compute(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        trace: &mut Vec<TraceSegment>,
        scout: &mut ScoutState,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
        band: Band,
        profile: &AlignmentProfile,
    ) -> S::Value;
}

/// Aligns a horizontal sequence against a vertical one with a fixed
/// algorithm family and per-aligner default options.
///
/// All entry points panic if either sequence is empty; callers are expected
/// to check lengths first. Band problems are reported as [`AlignError`]
/// before the engine runs.
pub struct Aligner<E> {
    engine: E,
    family: AlgorithmFamily,
    options: AlignOptions,
}

impl<E> Aligner<E> {
    pub fn new(engine: E, family: AlgorithmFamily) -> Self {
        Self {
            engine,
            family,
            options: AlignOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AlignOptions) -> Self {
        self.options = options;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Aligns with the aligner's options and writes the path into `trace`.
    pub fn align<S>(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        trace: &mut Vec<TraceSegment>,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
    ) -> Result<S::Value, AlignError>
    where
        S: ScoringScheme,
        E: DpEngine<S>,
    {
        let mut scout = ScoutState::default();
        let options = self.options;
        self.run(ctx, Some(trace), &mut scout, seq_h, seq_v, scoring, options)
    }

    /// Like [`Aligner::align`] with one-off options.
    pub fn align_with_options<S>(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        trace: &mut Vec<TraceSegment>,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
        options: AlignOptions,
    ) -> Result<S::Value, AlignError>
    where
        S: ScoringScheme,
        E: DpEngine<S>,
    {
        let mut scout = ScoutState::default();
        self.run(ctx, Some(trace), &mut scout, seq_h, seq_v, scoring, options)
    }

    /// Like [`Aligner::align`] with an explicit scout state, e.g. to iterate
    /// Waterman-Eggert suboptimal alignments.
    pub fn align_with_scout<S>(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        trace: &mut Vec<TraceSegment>,
        scout: &mut ScoutState,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
        options: AlignOptions,
    ) -> Result<S::Value, AlignError>
    where
        S: ScoringScheme,
        E: DpEngine<S>,
    {
        self.run(ctx, Some(trace), scout, seq_h, seq_v, scoring, options)
    }

    /// Score only. No trace is produced for the caller.
    pub fn score<S>(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
    ) -> Result<S::Value, AlignError>
    where
        S: ScoringScheme,
        E: DpEngine<S>,
    {
        let mut scout = ScoutState::default();
        let options = self.options;
        self.run(ctx, None, &mut scout, seq_h, seq_v, scoring, options)
    }

    pub fn score_with_options<S>(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
        options: AlignOptions,
    ) -> Result<S::Value, AlignError>
    where
        S: ScoringScheme,
        E: DpEngine<S>,
    {
        let mut scout = ScoutState::default();
        self.run(ctx, None, &mut scout, seq_h, seq_v, scoring, options)
    }

    pub fn score_with_scout<S>(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        scout: &mut ScoutState,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
        options: AlignOptions,
    ) -> Result<S::Value, AlignError>
    where
        S: ScoringScheme,
        E: DpEngine<S>,
    {
        self.run(ctx, None, scout, seq_h, seq_v, scoring, options)
    }

    /// Resolves the profile the given call would run, without running it.
    pub fn resolve<S: ScoringScheme>(
        &self,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
        options: &AlignOptions,
        with_trace: bool,
    ) -> AlignmentProfile {
        assert!(!seq_h.is_empty(), "horizontal sequence must not be empty");
        assert!(!seq_v.is_empty(), "vertical sequence must not be empty");

        let traceback = if with_trace {
            options.traceback()
        } else {
            TracebackMode::Off
        };
        let gap_model = GapCostModel::classify(scoring, seq_h, seq_v);
        let free_end_gaps = options.end_gaps().normalize();
        resolve_requested(self.family, free_end_gaps, traceback, gap_model, with_trace)
            .banded(options.band())
    }

    fn run<S>(
        &mut self,
        ctx: &mut DpContext<S::Value>,
        trace: Option<&mut Vec<TraceSegment>>,
        scout: &mut ScoutState,
        seq_h: &[u8],
        seq_v: &[u8],
        scoring: &S,
        options: AlignOptions,
    ) -> Result<S::Value, AlignError>
    where
        S: ScoringScheme,
        E: DpEngine<S>,
    {
        let profile = self.resolve(seq_h, seq_v, scoring, &options, trace.is_some());
        let band = profile.band;
        band.check_reachable(
            profile.family.is_global(),
            profile
                .structure
                .free_end_gaps()
                .unwrap_or(FreeEndGaps::NONE),
            seq_h.len(),
            seq_v.len(),
        )?;

        log::debug!(
            "dispatching {}x{} alignment: {}",
            seq_h.len(),
            seq_v.len(),
            profile
        );

        // The caller's buffer is only touched when it was supplied and the
        // resolved profile traces; otherwise the engine writes to scratch.
        let mut scratch = Vec::new();
        let out = match trace {
            Some(buffer) if profile.traceback.is_on() => {
                buffer.clear();
                buffer
            }
            _ => &mut scratch,
        };

        let score = self
            .engine
            .compute(ctx, out, scout, seq_h, seq_v, scoring, band, &profile);
        log::debug!("{} score {:?}", profile.family, score);
        Ok(score)
    }
}
