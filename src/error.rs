//! Error types for card, foundation, stack and table operations.
//!
//! Foundation rejections are not errors; see [`crate::Placement`].

use thiserror::Error;

use crate::card::Card;

/// The field that made a card invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCardReason {
    /// Suit is not one of the four suits.
    #[error("suit must be one of Hearts, Diamonds, Clubs or Spades")]
    Suit,
    /// Rank is outside 1..=13.
    #[error("rank {0} is outside 1..=13")]
    Rank(u8),
    /// Deck tag is neither A nor B.
    #[error("deck tag must be A or B")]
    DeckTag,
}

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// One of the card fields is outside its allowed set.
    #[error("invalid card: {0}")]
    InvalidCard(InvalidCardReason),
}

/// Errors that can occur when setting up a foundation pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoundationError {
    /// Position is outside 1..=8.
    #[error("foundation position {0} is outside 1..=8")]
    InvalidPosition(u8),
    /// Suit is not one of the four suits.
    #[error("foundation suit must be one of Hearts, Diamonds, Clubs or Spades")]
    InvalidSuit,
    /// Direction is neither ascending nor descending.
    #[error("foundation direction must be Ascending or Descending")]
    InvalidDirection,
}

/// Errors that can occur on draw stacks and decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Stack position is outside 1..=13.
    #[error("stack position {0} is outside 1..=13")]
    InvalidPosition(u8),
    /// The container holds no cards.
    #[error("no cards left")]
    Empty,
    /// Index does not address a card in the container.
    #[error("index {index} is out of range for {len} cards")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cards held.
        len: usize,
    },
}

/// Errors that can occur on a table of foundations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No foundation sits at this position.
    #[error("no foundation at position {0}")]
    PositionNotFound(u8),
    /// Two foundations were configured with the same position.
    #[error("foundation position {0} is configured twice")]
    DuplicatePosition(u8),
    /// This exact card (including its deck tag) is already on a foundation.
    #[error("card {0} is already on a foundation")]
    CardAlreadyPlaced(Card),
    /// This exact card is being offered by another caller right now.
    #[error("card {0} is already being offered to a foundation")]
    OfferInProgress(Card),
    /// A foundation could not be set up.
    #[error(transparent)]
    Foundation(#[from] FoundationError),
}
