//! Fighter model and derived display values shared across clients.
//!
//! `roster-core` defines the canonical fighter record, its stat bounds, and the
//! pure functions that turn records into what the frontends show: power level,
//! class traits, special abilities, and team-wide aggregates. Nothing in this
//! crate performs I/O; persistence lives behind `client-store-core`.
pub mod class;
pub mod derive;
pub mod error;
pub mod fighter;
pub mod stat;
pub mod team;

pub use class::FighterClass;
pub use derive::{
    SpecialAbility, class_traits, power_level, power_level_of, special_ability, weighted_power,
};
pub use error::ValidationError;
pub use fighter::{Fighter, FighterId, FighterPatch, NewFighter};
pub use stat::{MAX_STAT, MIN_STAT, Stat, StatKind, StatLine, clamp_stat};
pub use team::{TeamStats, aggregate};
