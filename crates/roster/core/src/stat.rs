//! Stat values and the three-axis stat line.
//!
//! Every fighter has exactly three stats (strength, speed, magic), each held in
//! the inclusive range `[MIN_STAT, MAX_STAT]`. The [`Stat`] newtype makes an
//! out-of-range value unrepresentable: all constructors clamp.

use std::fmt;

use crate::error::ValidationError;

/// Lowest value any stat may hold.
pub const MIN_STAT: u8 = 1;

/// Highest value any stat may hold.
pub const MAX_STAT: u8 = 10;

/// Default value for each stat on a fresh fighter.
pub const DEFAULT_STAT: u8 = 5;

/// Maps any integer to the nearest value in `[MIN_STAT, MAX_STAT]`.
///
/// Idempotent: `clamp_stat(clamp_stat(x) as i64) == clamp_stat(x)`.
pub fn clamp_stat(value: i64) -> u8 {
    value.clamp(MIN_STAT as i64, MAX_STAT as i64) as u8
}

/// Integer division rounded half-up, matching `Math.round(numer / denom)`.
///
/// `denom` must be positive.
pub(crate) fn round_ratio(numer: i64, denom: i64) -> i64 {
    debug_assert!(denom > 0);
    (2 * numer + denom).div_euclid(2 * denom)
}

/// A single stat value, always within `[MIN_STAT, MAX_STAT]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "i64"))]
pub struct Stat(u8);

impl Stat {
    pub const MIN: Stat = Stat(MIN_STAT);
    pub const MAX: Stat = Stat(MAX_STAT);
    pub const DEFAULT: Stat = Stat(DEFAULT_STAT);

    /// Creates a stat, clamping `value` into range.
    pub fn new(value: i64) -> Self {
        Self(clamp_stat(value))
    }

    /// Creates a stat from a non-integer input.
    ///
    /// The value is rounded half-up and then clamped. `NaN` and infinities are
    /// rejected rather than guessed at.
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteStat { value });
        }
        // `as` saturates, so huge magnitudes still clamp correctly.
        Ok(Self::new((value + 0.5).floor() as i64))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns this stat moved by `delta`, clamped to range.
    pub fn saturating_add(self, delta: i64) -> Self {
        Self::new(i64::from(self.0).saturating_add(delta))
    }

    /// Fill percentage for stat bars (`stat * 10`).
    pub const fn bar_percent(self) -> u8 {
        self.0 * 10
    }

    pub const fn is_min(self) -> bool {
        self.0 == MIN_STAT
    }

    pub const fn is_max(self) -> bool {
        self.0 == MAX_STAT
    }
}

impl Default for Stat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Stat {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Stat> for i64 {
    fn from(stat: Stat) -> Self {
        i64::from(stat.0)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three stat axes.
///
/// Declaration order is also the tie-break order when picking a primary stat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum StatKind {
    Strength,
    Speed,
    Magic,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [StatKind::Strength, StatKind::Speed, StatKind::Magic];

    /// Three-letter label used on compact cards.
    pub const fn abbrev(self) -> &'static str {
        match self {
            StatKind::Strength => "STR",
            StatKind::Speed => "SPD",
            StatKind::Magic => "MAG",
        }
    }
}

/// Strength, speed and magic of one fighter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine {
    pub strength: Stat,
    pub speed: Stat,
    pub magic: Stat,
}

impl StatLine {
    pub const fn new(strength: Stat, speed: Stat, magic: Stat) -> Self {
        Self {
            strength,
            speed,
            magic,
        }
    }

    /// Builds a stat line from raw integers, clamping each one.
    pub fn from_values(strength: i64, speed: i64, magic: i64) -> Self {
        Self::new(Stat::new(strength), Stat::new(speed), Stat::new(magic))
    }

    pub const fn get(&self, kind: StatKind) -> Stat {
        match kind {
            StatKind::Strength => self.strength,
            StatKind::Speed => self.speed,
            StatKind::Magic => self.magic,
        }
    }

    /// Returns a copy with one axis replaced.
    #[must_use]
    pub const fn with(mut self, kind: StatKind, stat: Stat) -> Self {
        match kind {
            StatKind::Strength => self.strength = stat,
            StatKind::Speed => self.speed = stat,
            StatKind::Magic => self.magic = stat,
        }
        self
    }

    /// The highest stat. Ties go to strength, then speed, then magic.
    pub fn primary(&self) -> StatKind {
        let max = self.strength.max(self.speed).max(self.magic);
        if self.strength == max {
            StatKind::Strength
        } else if self.speed == max {
            StatKind::Speed
        } else {
            StatKind::Magic
        }
    }
}
