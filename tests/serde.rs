//! Serialization tests, run with `--features serde`.

#![cfg(feature = "serde")]

use abpatience::{Card, DeckTag, Direction, FoundationConfig, Placement, Rank, Suit, TableOptions};

#[test]
fn card_round_trips_through_json() {
    let card = Card::new(Suit::Diamonds, Rank::Queen, DeckTag::B);

    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(json, r#"{"suit":"Diamonds","rank":"Queen","deck":"B"}"#);

    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);
}

#[test]
fn default_layout_round_trips_through_json() {
    let configs = TableOptions::default().foundations;

    let json = serde_json::to_string(&configs).unwrap();
    let back: Vec<FoundationConfig> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, configs);

    let config: FoundationConfig =
        serde_json::from_str(r#"{"position":5,"suit":"Hearts","direction":"Descending"}"#).unwrap();
    assert_eq!(config, FoundationConfig::new(5, Suit::Hearts, Direction::Descending));
}

#[test]
fn unknown_variants_are_rejected() {
    assert!(serde_json::from_str::<Suit>(r#""Stars""#).is_err());
    assert!(serde_json::from_str::<DeckTag>(r#""C""#).is_err());
    assert_eq!(
        serde_json::from_str::<Placement>(r#""RejectedFull""#).unwrap(),
        Placement::RejectedFull
    );
}
