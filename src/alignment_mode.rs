use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    NeedlemanWunsch, // global, linear gaps
    Gotoh,           // global, affine gaps
    SmithWaterman,   // local
    WatermanEggert,  // local, suboptimal enumeration
}

impl AlgorithmFamily {
    pub const ALL: [AlgorithmFamily; 4] = [
        AlgorithmFamily::NeedlemanWunsch,
        AlgorithmFamily::Gotoh,
        AlgorithmFamily::SmithWaterman,
        AlgorithmFamily::WatermanEggert,
    ];

    /// Global families honor the caller's end-gap policy, local ones ignore it.
    pub fn is_global(self) -> bool {
        match self {
            AlgorithmFamily::NeedlemanWunsch | AlgorithmFamily::Gotoh => true,
            AlgorithmFamily::SmithWaterman | AlgorithmFamily::WatermanEggert => false,
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmFamily::NeedlemanWunsch => "needleman-wunsch",
            AlgorithmFamily::Gotoh => "gotoh",
            AlgorithmFamily::SmithWaterman => "smith-waterman",
            AlgorithmFamily::WatermanEggert => "waterman-eggert",
        };
        f.write_str(name)
    }
}

/// Free end-gap request as supplied by the caller.
///
/// Four positional flags: top, right, left, bottom. The engine reads the
/// first two as leading-gap flags and the last two as trailing-gap flags,
/// see [`normalize_end_gaps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignConfig {
    top: bool,
    right: bool,
    left: bool,
    bottom: bool,
}

impl AlignConfig {
    pub const fn new(top: bool, right: bool, left: bool, bottom: bool) -> Self {
        Self {
            top,
            right,
            left,
            bottom,
        }
    }

    /// Semi-global: every edge free.
    pub const fn all_free() -> Self {
        Self::new(true, true, true, true)
    }

    pub fn top(&self) -> bool {
        self.top
    }

    pub fn right(&self) -> bool {
        self.right
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn bottom(&self) -> bool {
        self.bottom
    }

    /// Canonical form consumed by the profile resolver.
    pub fn normalize(&self) -> FreeEndGaps {
        normalize_end_gaps(self.top, self.right, self.left, self.bottom)
    }
}

/// End-gap policy in engine order.
///
/// `first_row` and `first_column` let the alignment start anywhere on the
/// first row or column; `last_row` and `last_column` let it end anywhere on
/// the last row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FreeEndGaps {
    pub first_row: bool,
    pub first_column: bool,
    pub last_row: bool,
    pub last_column: bool,
}

impl FreeEndGaps {
    pub const NONE: FreeEndGaps = FreeEndGaps {
        first_row: false,
        first_column: false,
        last_row: false,
        last_column: false,
    };

    const fn of(first_row: bool, first_column: bool, last_row: bool, last_column: bool) -> Self {
        Self {
            first_row,
            first_column,
            last_row,
            last_column,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// The start cell may be skipped when either leading edge is free.
    pub fn frees_start(&self) -> bool {
        self.first_row || self.first_column
    }

    /// The end cell may be skipped when either trailing edge is free.
    pub fn frees_end(&self) -> bool {
        self.last_row || self.last_column
    }

    pub fn as_tuple(&self) -> (bool, bool, bool, bool) {
        (self.first_row, self.first_column, self.last_row, self.last_column)
    }
}

/// Maps a (top, right, left, bottom) request to its canonical [`FreeEndGaps`].
///
/// The first two flags carry over in place, the last two trade places:
/// `left` becomes `last_column` and `bottom` becomes `last_row`. Every one of
/// the sixteen inputs has its own arm.
pub fn normalize_end_gaps(top: bool, right: bool, left: bool, bottom: bool) -> FreeEndGaps {
    let gaps = match (top, right, left, bottom) {
        (false, false, false, false) => FreeEndGaps::of(false, false, false, false),
        (false, false, false, true) => FreeEndGaps::of(false, false, true, false),
        (false, false, true, false) => FreeEndGaps::of(false, false, false, true),
        (false, false, true, true) => FreeEndGaps::of(false, false, true, true),
        (false, true, false, false) => FreeEndGaps::of(false, true, false, false),
        (false, true, false, true) => FreeEndGaps::of(false, true, true, false),
        (false, true, true, false) => FreeEndGaps::of(false, true, false, true),
        (false, true, true, true) => FreeEndGaps::of(false, true, true, true),
        (true, false, false, false) => FreeEndGaps::of(true, false, false, false),
        (true, false, false, true) => FreeEndGaps::of(true, false, true, false),
        (true, false, true, false) => FreeEndGaps::of(true, false, false, true),
        (true, false, true, true) => FreeEndGaps::of(true, false, true, true),
        (true, true, false, false) => FreeEndGaps::of(true, true, false, false),
        (true, true, false, true) => FreeEndGaps::of(true, true, true, false),
        (true, true, true, false) => FreeEndGaps::of(true, true, false, true),
        (true, true, true, true) => FreeEndGaps::of(true, true, true, true),
    };
    log::trace!(
        "normalized end gaps (top={}, right={}, left={}, bottom={}) -> {:?}",
        top,
        right,
        left,
        bottom,
        gaps
    );
    gaps
}
