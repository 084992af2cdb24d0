//! Pricing engine scenarios: table to leg to parlay figures

use chrono::Utc;
use parlay_desk::catalog::{Position, StatKey};
use parlay_desk::leg::{LegBuilder, LegError, Player};
use parlay_desk::parlay::Parlay;
use parlay_desk::pricing::{format_american_odds, payout, to_american_odds};
use parlay_desk::probability::{interpolate, Direction, ProbabilityTable};
use rust_decimal_macros::dec;

fn yardage_table() -> ProbabilityTable {
    ProbabilityTable::from_pairs([
        (dec!(100), dec!(80)),
        (dec!(200), dec!(60)),
        (dec!(300), dec!(40)),
    ])
}

fn quarterback() -> Player {
    Player {
        id: 3,
        name: "Field General".to_string(),
        team: "CIN".to_string(),
        position: Position::QB,
    }
}

#[test]
fn test_midpoint_interpolation() {
    let table = yardage_table();
    assert_eq!(interpolate(&table, dec!(150), Direction::Over), Some(dec!(70)));
    assert_eq!(interpolate(&table, dec!(150), Direction::Under), Some(dec!(30)));
}

#[test]
fn test_out_of_range_thresholds_clamp_to_edges() {
    let table = yardage_table();
    assert_eq!(interpolate(&table, dec!(50), Direction::Over), Some(dec!(80)));
    assert_eq!(interpolate(&table, dec!(450), Direction::Over), Some(dec!(40)));
    assert_eq!(interpolate(&table, dec!(450), Direction::Under), Some(dec!(60)));
}

#[test]
fn test_two_leg_parlay_figures() {
    let table = yardage_table();
    let mut parlay = Parlay::new(1, Utc::now(), dec!(10));

    let over = LegBuilder::new(quarterback(), StatKey::PassingYards)
        .threshold(150.0)
        .opponent("pit")
        .build(Some(&table))
        .unwrap();
    let coin_flip = ProbabilityTable::from_pairs([(dec!(1), dec!(50))]);
    let td = LegBuilder::new(quarterback(), StatKey::PassingTds)
        .threshold(1.0)
        .opponent("PIT")
        .build(Some(&coin_flip))
        .unwrap();
    assert_eq!(over.probability, Some(dec!(70)));
    assert_eq!(td.probability, Some(dec!(50)));

    parlay.legs.push(over);
    parlay.legs.push(td);
    let summary = parlay.summary();

    assert_eq!(summary.combined_probability, dec!(35));
    assert_eq!(summary.odds, Some(186));
    assert_eq!(format_american_odds(summary.odds), "+186");
    assert_eq!(summary.profit, dec!(18.6));
    assert_eq!(summary.total_return, dec!(28.6));
}

#[test]
fn test_unpriced_leg_is_excluded_not_zero() {
    let mut parlay = Parlay::new(2, Utc::now(), dec!(10));
    parlay.legs.push(
        LegBuilder::new(quarterback(), StatKey::PassingYards)
            .threshold(150.0)
            .opponent("PIT")
            .build(Some(&yardage_table()))
            .unwrap(),
    );
    parlay.legs.push(
        LegBuilder::new(quarterback(), StatKey::RushingYards)
            .threshold(20.5)
            .opponent("PIT")
            .build(None)
            .unwrap(),
    );

    let summary = parlay.summary();
    assert_eq!(summary.priced_legs, 1);
    assert_eq!(summary.combined_probability, dec!(70));
    assert_eq!(summary.odds, Some(-233));
}

#[test]
fn test_favorite_and_underdog_odds() {
    assert_eq!(to_american_odds(dec!(60)), Some(-150));
    assert_eq!(to_american_odds(dec!(25)), Some(300));
    assert_eq!(to_american_odds(dec!(0)), None);
    assert_eq!(payout(Some(-150), dec!(30)), dec!(20));
    assert_eq!(payout(None, dec!(30)), dec!(0));
}

#[test]
fn test_stat_must_match_position() {
    let result = LegBuilder::new(quarterback(), StatKey::ReceivingTds)
        .threshold(0.5)
        .opponent("PIT")
        .build(None);
    assert!(matches!(result, Err(LegError::StatNotOffered { .. })));
}

#[test]
fn test_bad_threshold_text() {
    let result = LegBuilder::new(quarterback(), StatKey::PassingYards)
        .threshold_input("two fifty")
        .opponent("PIT")
        .build(Some(&yardage_table()));
    assert!(matches!(result, Err(LegError::InvalidThreshold(_))));
}
