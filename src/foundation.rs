//! Foundation piles and their sequencing rules.
//!
//! A foundation is locked to one suit and one direction. It starts empty,
//! takes the boundary rank first (Ace when ascending, King when descending)
//! and then exactly one rank per step until it reaches the opposite boundary,
//! at which point it is full for good.
//!
//! Deck tags never take part in sequencing: the Clubs Two of deck A and the
//! Clubs Two of deck B are equally acceptable after a Clubs Ace.

use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank, Suit};
use crate::error::FoundationError;

/// Lowest valid foundation position.
pub const MIN_POSITION: u8 = 1;

/// Highest valid foundation position.
pub const MAX_POSITION: u8 = 8;

const fn check_position(position: u8) -> Result<u8, FoundationError> {
    if position < MIN_POSITION || position > MAX_POSITION {
        return Err(FoundationError::InvalidPosition(position));
    }
    Ok(position)
}

/// Build direction of a foundation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Ace up to King.
    Ascending,
    /// King down to Ace.
    Descending,
}

impl Direction {
    /// Returns the rank an empty foundation expects first.
    #[must_use]
    pub const fn first_rank(self) -> Rank {
        match self {
            Self::Ascending => Rank::Ace,
            Self::Descending => Rank::King,
        }
    }

    /// Returns the rank that completes a foundation.
    #[must_use]
    pub const fn last_rank(self) -> Rank {
        match self {
            Self::Ascending => Rank::King,
            Self::Descending => Rank::Ace,
        }
    }

    /// Returns the rank that follows `rank`, or `None` at the boundary.
    #[must_use]
    pub const fn step(self, rank: Rank) -> Option<Rank> {
        match self {
            Self::Ascending => rank.next(),
            Self::Descending => rank.prev(),
        }
    }

    /// Returns the direction name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

impl FromStr for Direction {
    type Err = FoundationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Ascending, Self::Descending]
            .into_iter()
            .find(|direction| direction.name() == s)
            .ok_or(FoundationError::InvalidDirection)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of offering a card to a foundation.
///
/// Rejections are ordinary game play, so they are values rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Placement {
    /// The card is now the top of the foundation.
    Accepted,
    /// The foundation is complete and takes no more cards.
    RejectedFull,
    /// The card is not the one the foundation expects next.
    RejectedWrongCard,
}

impl Placement {
    /// Returns whether the card was accepted.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A suit-locked, direction-locked build target.
///
/// Only [`try_accept`](Self::try_accept) changes the pile, and only forward.
/// There is no way to take a card back off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundationPile {
    position: u8,
    suit: Suit,
    direction: Direction,
    top: Option<Card>,
}

impl FoundationPile {
    /// Creates an empty foundation.
    ///
    /// # Errors
    ///
    /// Returns [`FoundationError::InvalidPosition`] if `position` is outside
    /// 1..=8. The position is never clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Direction, FoundationPile, Rank, Suit};
    ///
    /// let pile = FoundationPile::new(1, Suit::Hearts, Direction::Ascending).unwrap();
    /// assert_eq!(pile.expected_next(), Some((Suit::Hearts, Rank::Ace)));
    /// ```
    pub const fn new(
        position: u8,
        suit: Suit,
        direction: Direction,
    ) -> Result<Self, FoundationError> {
        let position = match check_position(position) {
            Ok(position) => position,
            Err(err) => return Err(err),
        };

        Ok(Self {
            position,
            suit,
            direction,
            top: None,
        })
    }

    /// Creates an empty foundation from untyped setup values.
    ///
    /// Suit and direction names must match exactly (`"Hearts"`,
    /// `"Descending"`). Checks run in order position, suit, direction; the
    /// first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`FoundationError::InvalidPosition`],
    /// [`FoundationError::InvalidSuit`] or [`FoundationError::InvalidDirection`].
    pub fn parse(position: u8, suit: &str, direction: &str) -> Result<Self, FoundationError> {
        let position = check_position(position)?;
        let suit = Suit::from_name(suit).ok_or(FoundationError::InvalidSuit)?;
        let direction = direction.parse()?;

        Ok(Self {
            position,
            suit,
            direction,
            top: None,
        })
    }

    /// Returns the position of the foundation.
    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Returns the suit the foundation is locked to.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the build direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the card on top, or `None` while empty.
    #[must_use]
    pub const fn top_card(&self) -> Option<Card> {
        self.top
    }

    /// Returns the suit and rank the foundation will accept next.
    ///
    /// Returns `None` once the foundation is full.
    #[must_use]
    pub const fn expected_next(&self) -> Option<(Suit, Rank)> {
        let rank = match self.top {
            None => Some(self.direction.first_rank()),
            Some(top) => self.direction.step(top.rank),
        };

        match rank {
            Some(rank) => Some((self.suit, rank)),
            None => None,
        }
    }

    /// Offers a card to the foundation.
    ///
    /// Only suit and rank are compared with [`expected_next`](Self::expected_next);
    /// the deck tag is ignored. A rejected card leaves the foundation untouched,
    /// so the same card may be offered again with the same result.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Card, DeckTag, Direction, FoundationPile, Placement, Rank, Suit};
    ///
    /// let mut pile = FoundationPile::new(1, Suit::Hearts, Direction::Ascending).unwrap();
    /// let two = Card::new(Suit::Hearts, Rank::Two, DeckTag::A);
    /// let ace = Card::new(Suit::Hearts, Rank::Ace, DeckTag::B);
    ///
    /// assert_eq!(pile.try_accept(two), Placement::RejectedWrongCard);
    /// assert_eq!(pile.try_accept(ace), Placement::Accepted);
    /// assert_eq!(pile.try_accept(two), Placement::Accepted);
    /// ```
    pub fn try_accept(&mut self, candidate: Card) -> Placement {
        let placement = match self.expected_next() {
            None => Placement::RejectedFull,
            Some((suit, rank)) if candidate.matches(suit, rank) => {
                self.top = Some(candidate);
                Placement::Accepted
            }
            Some(_) => Placement::RejectedWrongCard,
        };

        log::trace!(
            "foundation {} ({} {}): {} -> {:?}",
            self.position,
            self.suit,
            self.direction,
            candidate,
            placement
        );

        placement
    }

    /// Returns the number of cards accepted so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        match (self.top, self.direction) {
            (None, _) => 0,
            (Some(top), Direction::Ascending) => top.rank.number() as usize,
            (Some(top), Direction::Descending) => {
                (Rank::King.number() + 1 - top.rank.number()) as usize
            }
        }
    }

    /// Returns whether no card has been accepted yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Returns whether the foundation has reached its last rank.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.expected_next().is_none()
    }
}
