//! Table setup options.

use alloc::vec::Vec;

use crate::card::Suit;
use crate::error::FoundationError;
use crate::foundation::{Direction, FoundationPile, MAX_POSITION, MIN_POSITION};

/// Setup values for one foundation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoundationConfig {
    /// Table position (1..=8).
    pub position: u8,
    /// Suit the foundation is locked to.
    pub suit: Suit,
    /// Build direction.
    pub direction: Direction,
}

impl FoundationConfig {
    /// Creates a foundation config.
    #[must_use]
    pub const fn new(position: u8, suit: Suit, direction: Direction) -> Self {
        Self {
            position,
            suit,
            direction,
        }
    }

    /// Creates a foundation config from untyped values, e.g. read from a
    /// settings file.
    ///
    /// # Errors
    ///
    /// Returns [`FoundationError::InvalidPosition`],
    /// [`FoundationError::InvalidSuit`] or [`FoundationError::InvalidDirection`]
    /// for the first value that is out of its allowed set.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Direction, FoundationConfig, FoundationError, Suit};
    ///
    /// let config = FoundationConfig::parse(5, "Spades", "Descending").unwrap();
    /// assert_eq!(config.suit, Suit::Spades);
    /// assert_eq!(config.direction, Direction::Descending);
    ///
    /// assert_eq!(
    ///     FoundationConfig::parse(9, "Spades", "Descending"),
    ///     Err(FoundationError::InvalidPosition(9))
    /// );
    /// assert_eq!(
    ///     FoundationConfig::parse(5, "spades", "Descending"),
    ///     Err(FoundationError::InvalidSuit)
    /// );
    /// ```
    pub fn parse(position: u8, suit: &str, direction: &str) -> Result<Self, FoundationError> {
        let pile = FoundationPile::parse(position, suit, direction)?;
        Ok(Self::new(pile.position(), pile.suit(), pile.direction()))
    }

    /// Builds the empty foundation this config describes.
    ///
    /// # Errors
    ///
    /// Returns [`FoundationError::InvalidPosition`] if the position is outside
    /// 1..=8.
    pub const fn build(&self) -> Result<FoundationPile, FoundationError> {
        FoundationPile::new(self.position, self.suit, self.direction)
    }
}

/// Configuration options for a [`Table`](crate::Table).
///
/// The default is the standard two-deck layout: positions 1 to 4 build
/// Hearts, Diamonds, Clubs and Spades upward from the Ace, positions 5 to 8
/// build the same suits downward from the King. Use the builder methods to
/// customize it:
///
/// ```
/// use abpatience::{Direction, FoundationConfig, Suit, TableOptions};
///
/// let options = TableOptions::default()
///     .without_foundations()
///     .with_foundation(FoundationConfig::new(1, Suit::Clubs, Direction::Ascending))
///     .with_reject_duplicates(false);
/// assert_eq!(options.foundations.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Foundations to set up.
    pub foundations: Vec<FoundationConfig>,
    /// Whether a card identity already on a foundation is refused when
    /// offered again.
    pub reject_duplicates: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        let ascending = Suit::ALL
            .into_iter()
            .zip(MIN_POSITION..)
            .map(|(suit, position)| FoundationConfig::new(position, suit, Direction::Ascending));
        let descending = Suit::ALL
            .into_iter()
            .zip(MIN_POSITION + 4..=MAX_POSITION)
            .map(|(suit, position)| FoundationConfig::new(position, suit, Direction::Descending));

        Self {
            foundations: ascending.chain(descending).collect(),
            reject_duplicates: true,
        }
    }
}

impl TableOptions {
    /// Adds a foundation.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Direction, FoundationConfig, Suit, TableOptions};
    ///
    /// let options = TableOptions::default()
    ///     .without_foundations()
    ///     .with_foundation(FoundationConfig::new(3, Suit::Hearts, Direction::Descending));
    /// assert_eq!(options.foundations[0].position, 3);
    /// ```
    #[must_use]
    pub fn with_foundation(mut self, config: FoundationConfig) -> Self {
        self.foundations.push(config);
        self
    }

    /// Adds several foundations.
    #[must_use]
    pub fn with_foundations<I>(mut self, configs: I) -> Self
    where
        I: IntoIterator<Item = FoundationConfig>,
    {
        self.foundations.extend(configs);
        self
    }

    /// Removes all configured foundations.
    #[must_use]
    pub fn without_foundations(mut self) -> Self {
        self.foundations.clear();
        self
    }

    /// Sets whether duplicate card identities are refused.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::TableOptions;
    ///
    /// let options = TableOptions::default().with_reject_duplicates(false);
    /// assert!(!options.reject_duplicates);
    /// ```
    #[must_use]
    pub fn with_reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }
}
