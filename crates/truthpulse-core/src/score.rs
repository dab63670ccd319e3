//! Truth scores and the verdict buckets they fall into.
//!
//! A score is a mock value: it is drawn uniformly from `[0, 100)` and has no
//! relation to the claim being checked.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive upper bound of a truth score.
pub const SCORE_CEILING: u32 = 100;

/// Lowest score labelled [`Verdict::PartiallyTrue`].
pub const PARTIALLY_TRUE_FROM: u8 = 40;

/// Lowest score labelled [`Verdict::LikelyTrue`].
pub const LIKELY_TRUE_FROM: u8 = 70;

/// An integer truth score in `[0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TruthScore(u8);

impl TruthScore {
    /// Lowest possible score.
    pub const MIN: TruthScore = TruthScore(0);
    /// Highest possible score.
    pub const MAX: TruthScore = TruthScore(99);

    /// Build a score, rejecting anything at or above 100.
    pub fn new(value: u32) -> Result<Self> {
        if value >= SCORE_CEILING {
            return Err(Error::ScoreOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Map a unit-interval draw (as returned by `Math.random()`) onto a score.
    ///
    /// `floor(unit * 100)`, clamped so NaN and out-of-range inputs still land
    /// inside `[0, 100)`.
    pub fn from_unit(unit: f64) -> Self {
        if !unit.is_finite() || unit <= 0.0 {
            return Self::MIN;
        }
        let scaled = (unit * f64::from(SCORE_CEILING)).floor();
        if scaled >= f64::from(Self::MAX.0) {
            Self::MAX
        } else {
            Self(scaled as u8)
        }
    }

    /// The raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The remaining share of the gauge, `100 - score`.
    pub fn remainder(self) -> u8 {
        (SCORE_CEILING as u8) - self.0
    }

    /// Verdict bucket for this score.
    pub fn verdict(self) -> Verdict {
        Verdict::from_score(self)
    }
}

impl TryFrom<u32> for TruthScore {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TruthScore> for u32 {
    fn from(score: TruthScore) -> Self {
        u32::from(score.0)
    }
}

impl fmt::Display for TruthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative label for a truth score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Scores below 40.
    FalseInformation,
    /// Scores from 40 up to 69.
    PartiallyTrue,
    /// Scores of 70 and above.
    LikelyTrue,
}

impl Verdict {
    /// Bucket a score: `< 40`, `< 70`, else.
    pub fn from_score(score: TruthScore) -> Self {
        if score.0 < PARTIALLY_TRUE_FROM {
            Verdict::FalseInformation
        } else if score.0 < LIKELY_TRUE_FROM {
            Verdict::PartiallyTrue
        } else {
            Verdict::LikelyTrue
        }
    }

    /// Text shown under the gauge.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::FalseInformation => "False Information",
            Verdict::PartiallyTrue => "Partially True",
            Verdict::LikelyTrue => "Likely True",
        }
    }

    /// Colour family used for the label.
    pub fn tone(self) -> Tone {
        match self {
            Verdict::FalseInformation => Tone::Red,
            Verdict::PartiallyTrue => Tone::Yellow,
            Verdict::LikelyTrue => Tone::Green,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour family of a verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// False information.
    Red,
    /// Partially true.
    Yellow,
    /// Likely true.
    Green,
}

impl Tone {
    /// Tailwind text colour class.
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Red => "text-red-500",
            Tone::Yellow => "text-yellow-500",
            Tone::Green => "text-green-500",
        }
    }
}

/// Something that can produce a truth score on demand.
pub trait ScoreSource {
    /// Draw a score. Never fails and never looks at the claim.
    fn draw(&self) -> TruthScore;
}

impl<S: ScoreSource + ?Sized> ScoreSource for &S {
    fn draw(&self) -> TruthScore {
        (**self).draw()
    }
}

impl<S: ScoreSource + ?Sized> ScoreSource for Box<S> {
    fn draw(&self) -> TruthScore {
        (**self).draw()
    }
}

impl<S: ScoreSource + ?Sized> ScoreSource for std::sync::Arc<S> {
    fn draw(&self) -> TruthScore {
        (**self).draw()
    }
}

/// Uniform draws over `0..100` from the thread-local RNG.
#[cfg(feature = "rand")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScoreSource;

#[cfg(feature = "rand")]
impl ScoreSource for RandomScoreSource {
    fn draw(&self) -> TruthScore {
        use rand::Rng;

        TruthScore(rand::rng().random_range(0..SCORE_CEILING as u8))
    }
}

/// Always returns the same score.
#[derive(Debug, Clone, Copy)]
pub struct FixedScoreSource(TruthScore);

impl FixedScoreSource {
    /// Source that always yields `score`.
    pub fn new(score: TruthScore) -> Self {
        Self(score)
    }
}

impl ScoreSource for FixedScoreSource {
    fn draw(&self) -> TruthScore {
        self.0
    }
}
