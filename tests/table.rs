//! Table integration tests.

use std::sync::{Arc, Barrier};
use std::thread;

use abpatience::{
    Card, Deck, DeckTag, Direction, FoundationConfig, FoundationError, Placement, Rank, Suit,
    TWO_DECK_SIZE, Table, TableError, TableOptions,
};

const fn card(suit: Suit, rank: Rank, deck: DeckTag) -> Card {
    Card::new(suit, rank, deck)
}

fn default_table() -> Table {
    Table::new(TableOptions::default()).unwrap()
}

#[test]
fn default_layout_has_eight_foundations() {
    let table = default_table();
    let piles = table.foundations();
    assert_eq!(piles.len(), 8);

    for (pile, suit) in piles[..4].iter().zip(Suit::ALL) {
        assert_eq!(pile.suit(), suit);
        assert_eq!(pile.direction(), Direction::Ascending);
    }
    for (pile, suit) in piles[4..].iter().zip(Suit::ALL) {
        assert_eq!(pile.suit(), suit);
        assert_eq!(pile.direction(), Direction::Descending);
    }
    assert!(table.options().reject_duplicates);
}

#[test]
fn setup_errors_are_surfaced() {
    let bad_position = TableOptions::default()
        .without_foundations()
        .with_foundation(FoundationConfig::new(9, Suit::Hearts, Direction::Ascending));
    assert_eq!(
        Table::new(bad_position).err(),
        Some(TableError::Foundation(FoundationError::InvalidPosition(9)))
    );

    let duplicate = TableOptions::default().with_foundation(FoundationConfig::new(
        3,
        Suit::Spades,
        Direction::Descending,
    ));
    assert_eq!(
        Table::new(duplicate).err(),
        Some(TableError::DuplicatePosition(3))
    );
}

#[test]
fn unknown_position_is_an_error() {
    let table = Table::new(
        TableOptions::default()
            .without_foundations()
            .with_foundations([
                FoundationConfig::new(2, Suit::Hearts, Direction::Ascending),
                FoundationConfig::new(7, Suit::Hearts, Direction::Descending),
            ]),
    )
    .unwrap();

    assert_eq!(table.positions(), &[2, 7]);
    assert_eq!(
        table.offer(1, card(Suit::Hearts, Rank::Ace, DeckTag::A)),
        Err(TableError::PositionNotFound(1))
    );
    assert_eq!(table.expected_next(4), Err(TableError::PositionNotFound(4)));
    assert!(table.foundation(4).is_none());
}

#[test]
fn offer_tracks_placed_identities() {
    let table = default_table();
    let ace_a = card(Suit::Hearts, Rank::Ace, DeckTag::A);
    let ace_b = card(Suit::Hearts, Rank::Ace, DeckTag::B);

    assert_eq!(table.offer(5, ace_a), Ok(Placement::RejectedWrongCard));
    assert!(!table.is_placed(ace_a));

    assert_eq!(table.offer(1, ace_a), Ok(Placement::Accepted));
    assert!(table.is_placed(ace_a));
    assert!(!table.is_placed(ace_b));
    assert_eq!(table.placed_count(), 1);

    assert_eq!(table.offer(1, ace_a), Err(TableError::CardAlreadyPlaced(ace_a)));
    assert_eq!(
        table.expected_next(1),
        Ok(Some((Suit::Hearts, Rank::Two)))
    );
}

#[test]
fn duplicate_identity_refused_across_foundations() {
    let table = default_table();
    let two_a = card(Suit::Hearts, Rank::Two, DeckTag::A);

    assert_eq!(
        table.offer(1, card(Suit::Hearts, Rank::Ace, DeckTag::A)),
        Ok(Placement::Accepted)
    );
    assert_eq!(table.offer(1, two_a), Ok(Placement::Accepted));

    // Bring the descending Hearts pile down to the Three.
    for number in (3..=13).rev() {
        let rank = Rank::from_number(number).unwrap();
        assert_eq!(
            table.offer(5, card(Suit::Hearts, rank, DeckTag::B)),
            Ok(Placement::Accepted)
        );
    }
    assert_eq!(table.expected_next(5), Ok(Some((Suit::Hearts, Rank::Two))));

    assert_eq!(table.offer(5, two_a), Err(TableError::CardAlreadyPlaced(two_a)));
    assert_eq!(
        table.offer(5, card(Suit::Hearts, Rank::Two, DeckTag::B)),
        Ok(Placement::Accepted)
    );
}

#[test]
fn duplicates_allowed_when_disabled() {
    let options = TableOptions::default()
        .without_foundations()
        .with_foundations([
            FoundationConfig::new(1, Suit::Clubs, Direction::Ascending),
            FoundationConfig::new(2, Suit::Clubs, Direction::Ascending),
        ])
        .with_reject_duplicates(false);
    let table = Table::new(options).unwrap();
    let ace = card(Suit::Clubs, Rank::Ace, DeckTag::A);

    assert_eq!(table.offer(1, ace), Ok(Placement::Accepted));
    assert_eq!(table.offer(2, ace), Ok(Placement::Accepted));
    assert_eq!(table.offer(2, ace), Ok(Placement::RejectedWrongCard));
    assert!(table.is_placed(ace));
    assert_eq!(table.copies_placed(ace), 2);
    assert_eq!(table.placed_count(), 2);
}

#[test]
fn rejected_offer_keeps_earlier_placement_when_duplicates_allowed() {
    let options = TableOptions::default()
        .without_foundations()
        .with_foundations([
            FoundationConfig::new(1, Suit::Hearts, Direction::Ascending),
            FoundationConfig::new(3, Suit::Clubs, Direction::Ascending),
        ])
        .with_reject_duplicates(false);
    let ace = card(Suit::Clubs, Rank::Ace, DeckTag::A);

    for _ in 0..200 {
        let table = Arc::new(Table::new(options.clone()).unwrap());
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = [1, 3]
            .into_iter()
            .map(|position| {
                let table = Arc::clone(&table);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    table.offer(position, ace)
                })
            })
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(
            results,
            vec![Ok(Placement::RejectedWrongCard), Ok(Placement::Accepted)]
        );
        assert_eq!(table.foundation(3).unwrap().top_card(), Some(ace));
        assert!(table.is_placed(ace));
        assert_eq!(table.copies_placed(ace), 1);
    }
}

#[test]
fn auto_place_picks_first_accepting_foundation() {
    let table = default_table();

    assert_eq!(
        table.auto_place(card(Suit::Diamonds, Rank::King, DeckTag::A)),
        Ok(Some(6))
    );
    assert_eq!(
        table.auto_place(card(Suit::Diamonds, Rank::Ace, DeckTag::B)),
        Ok(Some(2))
    );
    assert_eq!(
        table.auto_place(card(Suit::Diamonds, Rank::Five, DeckTag::B)),
        Ok(None)
    );
    assert!(!table.is_placed(card(Suit::Diamonds, Rank::Five, DeckTag::B)));

    let king = card(Suit::Diamonds, Rank::King, DeckTag::A);
    assert_eq!(
        table.auto_place(king),
        Err(TableError::CardAlreadyPlaced(king))
    );
}

#[test]
fn two_decks_complete_the_table() {
    let table = default_table();
    let mut pending: Vec<Card> = Deck::two_decks().cards().to_vec();

    // Keep sweeping until every card has found a foundation.
    while !pending.is_empty() {
        let before = pending.len();
        pending.retain(|&c| table.auto_place(c).unwrap().is_none());
        assert!(pending.len() < before, "no progress with {pending:?}");
    }

    assert!(table.is_complete());
    assert_eq!(table.placed_count(), TWO_DECK_SIZE);

    let piles = table.into_foundations();
    for pile in &piles[..4] {
        assert_eq!(pile.top_card().map(|c| c.rank), Some(Rank::King));
    }
    for pile in &piles[4..] {
        assert_eq!(pile.top_card().map(|c| c.rank), Some(Rank::Ace));
    }
}

#[test]
fn concurrent_offers_place_each_identity_once() {
    let table = Arc::new(
        Table::new(
            TableOptions::default()
                .without_foundations()
                .with_foundations([
                    FoundationConfig::new(1, Suit::Spades, Direction::Ascending),
                    FoundationConfig::new(2, Suit::Spades, Direction::Ascending),
                ]),
        )
        .unwrap(),
    );
    let ace = card(Suit::Spades, Rank::Ace, DeckTag::A);

    let handles: Vec<_> = [1, 2]
        .into_iter()
        .map(|position| {
            let table = Arc::clone(&table);
            thread::spawn(move || table.offer(position, ace))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    let accepted = results
        .iter()
        .filter(|result| **result == Ok(Placement::Accepted))
        .count();

    assert_eq!(accepted, 1);
    assert!(results.iter().all(|result| matches!(
        result,
        Ok(Placement::Accepted)
            | Err(TableError::CardAlreadyPlaced(_) | TableError::OfferInProgress(_))
    )));
    assert_eq!(table.placed_count(), 1);
    assert_eq!(table.copies_placed(ace), 1);
}
