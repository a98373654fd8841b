use std::fmt;

use serde::Serialize;

/// Smallest allowed magnitude between adjacent levels in the standard band.
pub const MIN_GAP: u64 = 1;
/// Largest allowed magnitude between adjacent levels in the standard band.
pub const MAX_GAP: u64 = 3;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One input record: an ordered sequence of signed levels.
///
/// Reports are immutable once built. Removal trials produce new reports via
/// [`Report::without`]; the original is never touched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Report(Vec<i64>);

impl Report {
    pub fn new(levels: Vec<i64>) -> Self {
        Self(levels)
    }

    pub fn levels(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Independent copy with the level at `index` dropped (order preserved).
    /// Out-of-range indices yield an unchanged copy.
    pub fn without(&self, index: usize) -> Report {
        let mut levels = Vec::with_capacity(self.0.len().saturating_sub(1));
        levels.extend(
            self.0
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, v)| *v),
        );
        Report(levels)
    }
}

impl From<Vec<i64>> for Report {
    fn from(levels: Vec<i64>) -> Self {
        Self(levels)
    }
}

impl From<&[i64]> for Report {
    fn from(levels: &[i64]) -> Self {
        Self(levels.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Report {
    fn from(levels: [i64; N]) -> Self {
        Self(levels.to_vec())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tolerance band
// ---------------------------------------------------------------------------

/// Inclusive bound on `|levels[i+1] - levels[i]|`.
///
/// `min_gap` is never 0, so equal neighbours can never pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToleranceBand {
    min_gap: u64,
    max_gap: u64,
}

impl ToleranceBand {
    /// The standard band `[MIN_GAP, MAX_GAP]`.
    pub const STANDARD: ToleranceBand = ToleranceBand {
        min_gap: MIN_GAP,
        max_gap: MAX_GAP,
    };

    pub fn new(min_gap: u64, max_gap: u64) -> Result<Self, BandError> {
        if min_gap == 0 || min_gap > max_gap {
            return Err(BandError { min_gap, max_gap });
        }
        Ok(Self { min_gap, max_gap })
    }

    pub fn min_gap(&self) -> u64 {
        self.min_gap
    }

    pub fn max_gap(&self) -> u64 {
        self.max_gap
    }

    pub fn contains(&self, gap: u64) -> bool {
        gap >= self.min_gap && gap <= self.max_gap
    }
}

impl Default for ToleranceBand {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for ToleranceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_gap, self.max_gap)
    }
}

/// Rejected band bounds (`min_gap` must be >= 1 and <= `max_gap`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandError {
    pub min_gap: u64,
    pub max_gap: u64,
}

impl fmt::Display for BandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid tolerance band [{}, {}]: require 1 <= min_gap <= max_gap",
            self.min_gap, self.max_gap
        )
    }
}

impl std::error::Error for BandError {}

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// Global direction of a report, decided once from its first adjacent pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Direction implied by a single step, or `None` for a flat step.
    pub fn of_step(prev: i64, next: i64) -> Option<Self> {
        match next.cmp(&prev) {
            std::cmp::Ordering::Greater => Some(Direction::Increasing),
            std::cmp::Ordering::Less => Some(Direction::Decreasing),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increasing => "increasing",
            Direction::Decreasing => "decreasing",
        }
    }
}

/// What went wrong at the offending adjacent pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Equal neighbours (zero gap).
    Duplicate,
    /// The pair moves against the report's global direction.
    DirectionChange { expected: Direction },
    /// The pair moves the right way but its magnitude is outside the band.
    GapOutOfBand { gap: u64 },
}

/// First failing adjacent pair `(levels[index], levels[index + 1])`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub index: usize,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, j) = (self.index, self.index + 1);
        match &self.kind {
            ViolationKind::Duplicate => write!(f, "duplicate level at {i}..{j}"),
            ViolationKind::DirectionChange { expected } => {
                write!(f, "direction change at {i}..{j} (expected {})", expected.as_str())
            }
            ViolationKind::GapOutOfBand { gap } => write!(f, "gap {gap} out of band at {i}..{j}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

/// Outcome of the plain check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub safe: bool,
    /// Set iff `safe == false`.
    pub violation: Option<Violation>,
}

impl Verdict {
    pub fn safe() -> Self {
        Self {
            safe: true,
            violation: None,
        }
    }

    pub fn unsafe_at(violation: Violation) -> Self {
        Self {
            safe: false,
            violation: Some(violation),
        }
    }
}

/// Outcome of the dampened check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DampenedVerdict {
    pub safe: bool,
    /// Index whose removal made an unsafe report safe (first such, left to right).
    /// `None` when the report was already safe or no single removal helps.
    pub removed_index: Option<usize>,
    /// Plain-check violation of the original report.
    pub violation: Option<Violation>,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Which predicate an aggregate run applies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Plain,
    Dampened,
}

impl Mode {
    pub fn from_dampened(dampened: bool) -> Self {
        if dampened {
            Mode::Dampened
        } else {
            Mode::Plain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Dampened => "dampened",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    #[default]
    Parallel,
}

/// Policy for aggregate evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub band: ToleranceBand,
    pub mode: Mode,
    pub parallelism: Parallelism,
}

impl ValidatorConfig {
    /// Band [1, 3], plain mode, parallel evaluation.
    pub fn standard() -> Self {
        Self {
            band: ToleranceBand::STANDARD,
            mode: Mode::Plain,
            parallelism: Parallelism::Parallel,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
