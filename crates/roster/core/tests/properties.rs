//! Behavioral properties of the fighter model, checked across whole input ranges.

use roster_core::{
    Fighter, FighterClass, FighterId, NewFighter, SpecialAbility, StatLine, TeamStats, aggregate,
    clamp_stat, class_traits, power_level,
};

fn fighter(class: FighterClass, s: i64, p: i64, m: i64) -> Fighter {
    Fighter::from_new(
        FighterId::from("1"),
        NewFighter::new("Probe")
            .with_class(class)
            .with_stats(StatLine::from_values(s, p, m)),
    )
}

/// Reference evaluation in floating point, rounding half-up like `Math.round`.
fn reference_power(s: i64, p: i64, m: i64) -> i64 {
    let value = (s as f64 * 1.2 + p as f64 * 0.8 + m as f64 * 1.0) / 3.0;
    (value + 0.5).floor() as i64
}

#[test]
fn power_level_matches_formula_over_full_range() {
    for s in 1..=10 {
        for p in 1..=10 {
            for m in 1..=10 {
                assert_eq!(
                    power_level(&StatLine::from_values(s, p, m)),
                    reference_power(s, p, m),
                    "s={s} p={p} m={m}"
                );
            }
        }
    }
}

#[test]
fn power_level_table() {
    let table = [
        ((6, 9, 4), 6),
        ((8, 4, 3), 5),
        ((3, 5, 10), 6),
        ((8, 5, 3), 6),
        ((3, 4, 9), 5),
        ((9, 3, 4), 6),
        ((1, 1, 1), 1),
        ((10, 10, 10), 10),
    ];
    for ((s, p, m), expected) in table {
        assert_eq!(power_level(&StatLine::from_values(s, p, m)), expected);
    }
}

#[test]
fn clamp_stat_examples_and_idempotence() {
    assert_eq!(clamp_stat(-5), 1);
    assert_eq!(clamp_stat(15), 10);
    for x in -1000..=1000 {
        let once = clamp_stat(x);
        assert_eq!(clamp_stat(i64::from(once)), once);
        assert!((1..=10).contains(&once));
    }
}

#[test]
fn traits_for_mage_and_unknown() {
    assert_eq!(
        class_traits(&FighterClass::Mage),
        ["Wise", "Mystical", "Powerful"]
    );
    assert_eq!(
        class_traits(&FighterClass::from("Unknown")),
        ["Resourceful", "Adaptable", "Skilled"]
    );
}

#[test]
fn equal_stats_select_strength_axis() {
    let warrior = fighter(FighterClass::Warrior, 7, 7, 7);
    let rendered = warrior.special_ability().to_string();
    assert!(rendered.starts_with("Crushing Blow: "), "{rendered}");
    let (name, description) = SpecialAbility::split(&rendered).unwrap();
    assert_eq!(name, "Crushing Blow");
    assert!(!description.is_empty());
}

#[test]
fn aggregate_examples() {
    assert_eq!(aggregate(&Vec::<Fighter>::new()), TeamStats::EMPTY);

    let roster = vec![
        fighter(FighterClass::Other("Assassin".into()), 6, 9, 4),
        fighter(FighterClass::Guardian, 8, 4, 3),
        fighter(FighterClass::Mage, 3, 5, 10),
    ];
    let stats = aggregate(&roster);
    assert_eq!(stats.total_fighters, 3);
    assert_eq!(stats.avg_strength, 6);
    assert_eq!(stats.avg_speed, 6);
    assert_eq!(stats.avg_magic, 6);
    assert_eq!(stats.team_power, 6);
}

#[test]
fn blank_description_defaults_from_class() {
    let created = NewFighter::new("Mystic Seer")
        .with_class(FighterClass::Mage)
        .normalized()
        .unwrap();
    assert_eq!(created.description, "A mighty mage ready for battle.");
}
