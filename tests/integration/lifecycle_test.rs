//! Parlay lifecycle against real and in-memory stores

use parlay_desk::catalog::{Position, StatKey};
use parlay_desk::config::ParlayConfig;
use parlay_desk::leg::{Leg, LegBuilder, Player};
use parlay_desk::parlay::{LifecycleState, ParlayError, ParlayManager, SaveOutcome, MAX_LEGS};
use parlay_desk::probability::ProbabilityTable;
use parlay_desk::store::{JsonFileStore, MemoryStore, ParlayStore};
use rust_decimal_macros::dec;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

fn receiver_leg(threshold: f64) -> Leg {
    let player = Player {
        id: 81,
        name: "Deep Threat".to_string(),
        team: "MIN".to_string(),
        position: Position::WR,
    };
    let table = ProbabilityTable::from_pairs([(dec!(40), dec!(75)), (dec!(80), dec!(35))]);
    LegBuilder::new(player, StatKey::ReceivingYards)
        .threshold(threshold)
        .opponent("CHI")
        .build(Some(&table))
        .unwrap()
}

#[tokio::test]
async fn test_capacity_is_ten_legs() {
    let manager = ParlayManager::open(MemoryStore::new(), &ParlayConfig::default())
        .await
        .unwrap();
    manager.start().await.unwrap();

    for _ in 0..MAX_LEGS {
        assert_ok!(manager.add_leg(receiver_leg(60.5)).await);
    }
    let eleventh = manager.add_leg(receiver_leg(60.5)).await;
    assert!(matches!(eleventh, Err(ParlayError::CapacityExceeded { max: 10 })));
    assert_eq!(manager.draft().await.unwrap().legs.len(), MAX_LEGS);
}

#[tokio::test]
async fn test_empty_save_keeps_drafting() {
    let store = MemoryStore::new();
    let manager = ParlayManager::open(store.clone(), &ParlayConfig::default())
        .await
        .unwrap();
    manager.start().await.unwrap();

    assert_eq!(manager.save().await.unwrap(), SaveOutcome::Empty);
    assert_eq!(manager.state().await, LifecycleState::Drafting);
    assert!(manager.saved().await.is_empty());
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_saved_parlays_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("parlays.json");

    let id = {
        let manager = ParlayManager::open(JsonFileStore::new(&path), &ParlayConfig::default())
            .await
            .unwrap();
        manager.start().await.unwrap();
        manager.add_leg(receiver_leg(60.0)).await.unwrap();
        manager.set_stake_input("25").await.unwrap();
        match manager.save().await.unwrap() {
            SaveOutcome::Saved(id) => id,
            SaveOutcome::Empty => panic!("draft had a leg"),
        }
    };

    let reopened = ParlayManager::open(JsonFileStore::new(&path), &ParlayConfig::default())
        .await
        .unwrap();
    let saved = reopened.saved().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, id);
    assert_eq!(saved[0].bet_amount, dec!(25));
    assert_eq!(saved[0].legs[0].probability, Some(dec!(55)));
    assert_eq!(reopened.state().await, LifecycleState::Idle);

    assert!(reopened.delete(id).await.unwrap());
    assert!(JsonFileStore::new(&path).load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_discards_draft() {
    let store = MemoryStore::new();
    let manager = ParlayManager::open(store.clone(), &ParlayConfig::default())
        .await
        .unwrap();
    manager.start().await.unwrap();
    manager.add_leg(receiver_leg(50.0)).await.unwrap();

    let discarded = manager.cancel().await.unwrap();
    assert_eq!(discarded.legs.len(), 1);
    assert_eq!(manager.state().await, LifecycleState::Idle);
    assert_err!(manager.add_leg(receiver_leg(50.0)).await);
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_failed_load_refuses_to_open() {
    let store = MemoryStore::new();
    store.fail_loads(true);
    let opened = ParlayManager::open(store, &ParlayConfig::default()).await;
    assert!(matches!(opened, Err(ParlayError::Persistence(_))));
}
