//! Fighter classes and the fixed tables keyed by them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::stat::StatLine;

/// Fighter class.
///
/// The six selectable classes are closed; records created elsewhere may carry
/// any other label, which is kept verbatim in [`FighterClass::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum FighterClass {
    #[default]
    Warrior,
    Rogue,
    Mage,
    Guardian,
    Ranger,
    Monk,
    /// A label outside the selectable set.
    Other(String),
}

impl FighterClass {
    /// Classes offered by the create and edit forms, in display order.
    pub const SELECTABLE: [FighterClass; 6] = [
        FighterClass::Warrior,
        FighterClass::Rogue,
        FighterClass::Mage,
        FighterClass::Guardian,
        FighterClass::Ranger,
        FighterClass::Monk,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FighterClass::Warrior => "Warrior",
            FighterClass::Rogue => "Rogue",
            FighterClass::Mage => "Mage",
            FighterClass::Guardian => "Guardian",
            FighterClass::Ranger => "Ranger",
            FighterClass::Monk => "Monk",
            FighterClass::Other(label) => label,
        }
    }

    /// Canonical stat triple applied when this class is picked on the create form.
    ///
    /// `Other` has no preset; the form keeps whatever stats it had.
    pub fn preset(&self) -> Option<StatLine> {
        let (strength, speed, magic) = match self {
            FighterClass::Warrior => (8, 5, 3),
            FighterClass::Rogue => (5, 8, 3),
            FighterClass::Mage => (3, 4, 9),
            FighterClass::Guardian => (9, 3, 4),
            FighterClass::Ranger => (6, 7, 4),
            FighterClass::Monk => (7, 6, 6),
            FighterClass::Other(_) => return None,
        };
        Some(StatLine::from_values(strength, speed, magic))
    }

    /// Description stored when a fighter is created without one.
    pub fn default_description(&self) -> String {
        format!("A mighty {} ready for battle.", self.as_str().to_lowercase())
    }

    /// Next selectable class, wrapping around. `Other` moves to the first class.
    pub fn next(&self) -> FighterClass {
        match self.selectable_index() {
            Some(i) => Self::SELECTABLE[(i + 1) % Self::SELECTABLE.len()].clone(),
            None => Self::SELECTABLE[0].clone(),
        }
    }

    /// Previous selectable class, wrapping around. `Other` moves to the last class.
    pub fn previous(&self) -> FighterClass {
        let len = Self::SELECTABLE.len();
        match self.selectable_index() {
            Some(i) => Self::SELECTABLE[(i + len - 1) % len].clone(),
            None => Self::SELECTABLE[len - 1].clone(),
        }
    }

    fn selectable_index(&self) -> Option<usize> {
        Self::SELECTABLE.iter().position(|class| class == self)
    }
}

impl FromStr for FighterClass {
    type Err = Infallible;

    /// Exact match on the canonical names; anything else is `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Warrior" => FighterClass::Warrior,
            "Rogue" => FighterClass::Rogue,
            "Mage" => FighterClass::Mage,
            "Guardian" => FighterClass::Guardian,
            "Ranger" => FighterClass::Ranger,
            "Monk" => FighterClass::Monk,
            other => FighterClass::Other(other.to_string()),
        })
    }
}

impl From<&str> for FighterClass {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(class) => class,
            Err(never) => match never {},
        }
    }
}

impl From<String> for FighterClass {
    fn from(s: String) -> Self {
        FighterClass::from(s.as_str())
    }
}

impl From<FighterClass> for String {
    fn from(class: FighterClass) -> Self {
        match class {
            FighterClass::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FighterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
