//! Derived display values: power level, class traits, special abilities.
//!
//! All functions here are pure and total over well-formed fighters.

use std::fmt;

use crate::class::FighterClass;
use crate::fighter::Fighter;
use crate::stat::{StatKind, StatLine, round_ratio};

/// `round((strength * 1.2 + speed * 0.8 + magic * 1.0) / 3)` over raw integers.
///
/// Evaluated exactly as `(12s + 8p + 10m) / 30` rounded half-up. The numerator
/// is always even, so the quotient never lands on a `.5` tie and the result
/// equals the real-number formula for every input. Missing stats are passed
/// as `0`.
pub fn weighted_power(strength: i64, speed: i64, magic: i64) -> i64 {
    round_ratio(12 * strength + 8 * speed + 10 * magic, 30)
}

/// Power level of a stat line.
pub fn power_level(stats: &StatLine) -> i64 {
    weighted_power(
        stats.strength.into(),
        stats.speed.into(),
        stats.magic.into(),
    )
}

/// Power level of a possibly-absent fighter; `0` when there is none.
pub fn power_level_of(fighter: Option<&Fighter>) -> i64 {
    fighter.map_or(0, |fighter| power_level(&fighter.stats))
}

/// Three personality traits for a class, in display order.
pub fn class_traits(class: &FighterClass) -> [&'static str; 3] {
    match class {
        FighterClass::Warrior => ["Brave", "Strong", "Direct"],
        FighterClass::Rogue => ["Cunning", "Swift", "Stealthy"],
        FighterClass::Mage => ["Wise", "Mystical", "Powerful"],
        FighterClass::Guardian => ["Defensive", "Sturdy", "Protective"],
        FighterClass::Ranger => ["Sharp-eyed", "Agile", "Nature-bonded"],
        FighterClass::Monk => ["Balanced", "Disciplined", "Spiritual"],
        FighterClass::Other(_) => ["Resourceful", "Adaptable", "Skilled"],
    }
}

/// A named ability, rendered as `"Name: Description"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialAbility {
    pub name: &'static str,
    pub description: &'static str,
}

impl SpecialAbility {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    /// Splits rendered ability text on the first colon.
    pub fn split(text: &str) -> Option<(&str, &str)> {
        let (name, description) = text.split_once(':')?;
        Some((name.trim(), description.trim_start()))
    }
}

impl fmt::Display for SpecialAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

const CRUSHING_BLOW: SpecialAbility = SpecialAbility::new(
    "Crushing Blow",
    "A devastating attack that breaks through armor",
);
const UNBREAKABLE_WALL: SpecialAbility = SpecialAbility::new(
    "Unbreakable Wall",
    "Greatly reduces damage taken for a short time",
);
const POWER_STRIKE: SpecialAbility =
    SpecialAbility::new("Power Strike", "A powerful blow that deals increased damage");
const SHADOW_STRIKE: SpecialAbility = SpecialAbility::new(
    "Shadow Strike",
    "An attack from stealth that deals critical damage",
);
const RAPID_SHOT: SpecialAbility =
    SpecialAbility::new("Rapid Shot", "Fires multiple arrows in quick succession");
const SWIFT_REFLEXES: SpecialAbility = SpecialAbility::new(
    "Swift Reflexes",
    "Dodges incoming attacks with increased chance",
);
const ARCANE_BLAST: SpecialAbility =
    SpecialAbility::new("Arcane Blast", "A powerful burst of magical energy");
const SPIRIT_WAVE: SpecialAbility =
    SpecialAbility::new("Spirit Wave", "Channels inner energy to heal and damage");
const MYSTIC_AURA: SpecialAbility =
    SpecialAbility::new("Mystic Aura", "Enhances magical abilities for a short time");

/// Ability for a class whose primary stat is `axis`.
pub fn ability_for(axis: StatKind, class: &FighterClass) -> SpecialAbility {
    match (axis, class) {
        (StatKind::Strength, FighterClass::Warrior) => CRUSHING_BLOW,
        (StatKind::Strength, FighterClass::Guardian) => UNBREAKABLE_WALL,
        (StatKind::Strength, _) => POWER_STRIKE,
        (StatKind::Speed, FighterClass::Rogue) => SHADOW_STRIKE,
        (StatKind::Speed, FighterClass::Ranger) => RAPID_SHOT,
        (StatKind::Speed, _) => SWIFT_REFLEXES,
        (StatKind::Magic, FighterClass::Mage) => ARCANE_BLAST,
        (StatKind::Magic, FighterClass::Monk) => SPIRIT_WAVE,
        (StatKind::Magic, _) => MYSTIC_AURA,
    }
}

/// Special ability picked from the fighter's primary stat and class.
pub fn special_ability(fighter: &Fighter) -> SpecialAbility {
    ability_for(fighter.stats.primary(), &fighter.class)
}
