//! Render-ready snapshots of fighters.
//!
//! Presentation layers draw these without calling back into the derivation
//! functions.

use roster_core::{Fighter, FighterId, SpecialAbility, StatKind, StatLine};

/// One labelled stat bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBarView {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: u8,
    /// Fill width, 0-100.
    pub percent: u8,
}

impl StatBarView {
    pub fn bars(stats: &StatLine) -> [StatBarView; 3] {
        StatKind::ALL.map(|kind| {
            let stat = stats.get(kind);
            StatBarView {
                kind,
                label: kind.abbrev(),
                value: stat.get(),
                percent: stat.bar_percent(),
            }
        })
    }
}

/// Compact roster card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterCardView {
    pub id: FighterId,
    pub name: String,
    pub class: String,
    pub bars: [StatBarView; 3],
    pub description: String,
    pub power_level: i64,
    pub selected: bool,
}

impl FighterCardView {
    pub fn from_fighter(fighter: &Fighter, selected: bool) -> Self {
        Self {
            id: fighter.id.clone(),
            name: fighter.name.clone(),
            class: fighter.class.to_string(),
            bars: StatBarView::bars(&fighter.stats),
            description: fighter.description.clone(),
            power_level: fighter.power_level(),
            selected,
        }
    }
}

/// Full detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterDetailView {
    pub id: FighterId,
    pub name: String,
    pub class: String,
    pub bars: [StatBarView; 3],
    pub power_level: i64,
    pub traits: [&'static str; 3],
    pub ability: SpecialAbility,
    pub primary: StatKind,
    pub description: String,
}

impl FighterDetailView {
    pub fn from_fighter(fighter: &Fighter) -> Self {
        Self {
            id: fighter.id.clone(),
            name: fighter.name.clone(),
            class: fighter.class.to_string(),
            bars: StatBarView::bars(&fighter.stats),
            power_level: fighter.power_level(),
            traits: fighter.traits(),
            ability: fighter.special_ability(),
            primary: fighter.stats.primary(),
            description: fighter.description.clone(),
        }
    }
}
