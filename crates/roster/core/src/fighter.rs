//! Fighter records: persisted fighters, creation input, and partial updates.

use std::fmt;

use crate::class::FighterClass;
use crate::derive::{self, SpecialAbility};
use crate::error::ValidationError;
use crate::stat::{Stat, StatKind, StatLine};

/// Opaque identifier assigned by the store when a fighter is created.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FighterId(String);

impl FighterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FighterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for FighterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for FighterId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted roster entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub class: FighterClass,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: StatLine,
    pub description: String,
}

impl Fighter {
    /// Attaches a store-assigned id to creation input.
    pub fn from_new(id: FighterId, fighter: NewFighter) -> Self {
        let NewFighter {
            name,
            class,
            stats,
            description,
        } = fighter;
        Self {
            id,
            name,
            class,
            stats,
            description,
        }
    }

    pub fn power_level(&self) -> i64 {
        derive::power_level(&self.stats)
    }

    pub fn traits(&self) -> [&'static str; 3] {
        derive::class_traits(&self.class)
    }

    pub fn special_ability(&self) -> SpecialAbility {
        derive::special_ability(self)
    }

    /// Everything but the id, e.g. to seed an edit form.
    pub fn to_new(&self) -> NewFighter {
        NewFighter {
            name: self.name.clone(),
            class: self.class.clone(),
            stats: self.stats,
            description: self.description.clone(),
        }
    }
}

/// Creation input: a fighter without an id.
///
/// Defaults to a 5/5/5 Warrior with an empty name and description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewFighter {
    pub name: String,
    pub class: FighterClass,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: StatLine,
    pub description: String,
}

impl NewFighter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: FighterClass) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: StatLine) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_stat(mut self, kind: StatKind, stat: Stat) -> Self {
        self.stats = self.stats.with(kind, stat);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Applies the creation rules every store must enforce.
    ///
    /// The name is trimmed and must be non-empty. A blank description is
    /// replaced with the class template. Stats are already in range by type.
    pub fn normalized(mut self) -> Result<Self, ValidationError> {
        self.name = normalize_name(&self.name)?;
        if self.description.trim().is_empty() {
            self.description = self.class.default_description();
        }
        Ok(self)
    }
}

/// Field-level partial update. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterPatch {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub class: Option<FighterClass>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub strength: Option<Stat>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub speed: Option<Stat>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub magic: Option<Stat>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub description: Option<String>,
}

impl FighterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that overwrites every editable field.
    pub fn replace_all(fighter: &NewFighter) -> Self {
        Self {
            name: Some(fighter.name.clone()),
            class: Some(fighter.class.clone()),
            strength: Some(fighter.stats.strength),
            speed: Some(fighter.stats.speed),
            magic: Some(fighter.stats.magic),
            description: Some(fighter.description.clone()),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: FighterClass) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn with_stat(mut self, kind: StatKind, stat: Stat) -> Self {
        match kind {
            StatKind::Strength => self.strength = Some(stat),
            StatKind::Speed => self.speed = Some(stat),
            StatKind::Magic => self.magic = Some(stat),
        }
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects a present-but-blank name and trims a present name.
    pub fn normalized(mut self) -> Result<Self, ValidationError> {
        if let Some(name) = self.name.take() {
            self.name = Some(normalize_name(&name)?);
        }
        Ok(self)
    }

    /// Returns `fighter` with every present field overwritten.
    pub fn apply_to(&self, fighter: &Fighter) -> Fighter {
        let mut updated = fighter.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(class) = &self.class {
            updated.class = class.clone();
        }
        if let Some(strength) = self.strength {
            updated.stats.strength = strength;
        }
        if let Some(speed) = self.speed {
            updated.stats.speed = speed;
        }
        if let Some(magic) = self.magic {
            updated.stats.magic = magic;
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        updated
    }
}

fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}
