//! Roster-wide aggregates.

use crate::derive::weighted_power;
use crate::fighter::Fighter;
use crate::stat::round_ratio;

/// Averages over the current roster. Derived on every read, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamStats {
    pub total_fighters: usize,
    pub avg_strength: i64,
    pub avg_speed: i64,
    pub avg_magic: i64,
    pub team_power: i64,
}

impl TeamStats {
    pub const EMPTY: TeamStats = TeamStats {
        total_fighters: 0,
        avg_strength: 0,
        avg_speed: 0,
        avg_magic: 0,
        team_power: 0,
    };
}

/// Aggregates a roster in one pass.
///
/// Each average is rounded half-up first; team power is then computed from the
/// rounded averages. Rounding after combining gives different numbers, so the
/// order matters.
pub fn aggregate<'a, I>(fighters: I) -> TeamStats
where
    I: IntoIterator<Item = &'a Fighter>,
{
    let mut count: i64 = 0;
    let (mut strength, mut speed, mut magic) = (0i64, 0i64, 0i64);

    for fighter in fighters {
        count += 1;
        strength += i64::from(fighter.stats.strength);
        speed += i64::from(fighter.stats.speed);
        magic += i64::from(fighter.stats.magic);
    }

    if count == 0 {
        return TeamStats::EMPTY;
    }

    let avg_strength = round_ratio(strength, count);
    let avg_speed = round_ratio(speed, count);
    let avg_magic = round_ratio(magic, count);

    TeamStats {
        total_fighters: count as usize,
        avg_strength,
        avg_speed,
        avg_magic,
        team_power: weighted_power(avg_strength, avg_speed, avg_magic),
    }
}
