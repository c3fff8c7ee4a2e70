//! Card identity types for two interleaved decks.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::error::{CardError, InvalidCardReason};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }

    /// Returns the first letter of the suit name.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Looks up a suit by its exact name, e.g. `"Hearts"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.name() == name)
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(CardError::InvalidCard(InvalidCardReason::Suit))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, Ace low and King high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Converts a number in 1..=13 to a rank.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if matches!(number, 1..=13) {
            Some(Self::ALL[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Returns the rank number (1 = Ace, 13 = King).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the rank symbol used in card labels.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the next higher rank, or `None` for King.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Returns the next lower rank, or `None` for Ace.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(CardError::InvalidCard(InvalidCardReason::Rank(number)))
    }
}

/// Which of the two physical decks a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeckTag {
    /// Deck A.
    A,
    /// Deck B.
    B,
}

impl DeckTag {
    /// Both deck tags.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Returns the deck letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

impl FromStr for DeckTag {
    type Err = CardError;

    /// Parses `"A"` or `"B"`; lowercase input is normalized first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            _ => Err(CardError::InvalidCard(InvalidCardReason::DeckTag)),
        }
    }
}

/// A single physical card: suit, rank and the deck it came from.
///
/// Two cards are equal only when all three fields match, so the Hearts Ace
/// of deck A and the Hearts Ace of deck B are distinct identities. The
/// [`label`](Self::label) is derived and plays no part in comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// The deck the card belongs to.
    pub deck: DeckTag,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, deck: DeckTag) -> Self {
        Self { suit, rank, deck }
    }

    /// Creates a card from untyped input: a suit name, a rank number and a
    /// deck letter.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] naming the first field that is
    /// outside its allowed set.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Card, DeckTag, Rank, Suit};
    ///
    /// let card = Card::parse("Hearts", 1, "a").unwrap();
    /// assert_eq!(card, Card::new(Suit::Hearts, Rank::Ace, DeckTag::A));
    /// assert_eq!(card.label(), "HAA");
    /// ```
    pub fn parse(suit: &str, rank: u8, deck: &str) -> Result<Self, CardError> {
        let rank = Rank::try_from(rank)?;
        let suit = suit.parse()?;
        let deck = deck.parse()?;
        Ok(Self::new(suit, rank, deck))
    }

    /// Returns the display label: suit initial, rank symbol, deck letter
    /// (`"HAA"`, `"S10B"`, `"DKA"`).
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Returns whether the card has the given suit and rank, ignoring its deck.
    #[must_use]
    pub fn matches(&self, suit: Suit, rank: Rank) -> bool {
        self.suit == suit && self.rank == rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.suit.initial(),
            self.rank.symbol(),
            self.deck.letter()
        )
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct card identities across decks A and B.
pub const TWO_DECK_SIZE: usize = DECK_SIZE * 2;
