//! Card identity and foundation sequencing rules for two-deck patience games,
//! with optional `no_std` support.
//!
//! Two physical decks, tagged A and B, are in play at once. Every [`Card`]
//! carries its [`DeckTag`], so the two Hearts Aces are distinct identities.
//! A [`FoundationPile`] is locked to one suit and one [`Direction`] and takes
//! cards strictly one rank at a time, from either deck.
//!
//! # Example
//!
//! ```
//! use abpatience::{Card, DeckTag, Direction, FoundationPile, Placement, Rank, Suit};
//!
//! let mut pile = FoundationPile::new(5, Suit::Spades, Direction::Descending).unwrap();
//! let king = Card::new(Suit::Spades, Rank::King, DeckTag::B);
//! assert_eq!(pile.try_accept(king), Placement::Accepted);
//! assert_eq!(pile.expected_next(), Some((Suit::Spades, Rank::Queen)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod foundation;
pub mod options;
pub mod stack;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, DeckTag, Rank, Suit, TWO_DECK_SIZE};
pub use error::{CardError, FoundationError, InvalidCardReason, StackError, TableError};
pub use foundation::{Direction, FoundationPile, MAX_POSITION, MIN_POSITION, Placement};
pub use options::{FoundationConfig, TableOptions};
pub use stack::{CardStack, Deck, MAX_STACK_POSITION, MIN_STACK_POSITION};
pub use table::Table;
