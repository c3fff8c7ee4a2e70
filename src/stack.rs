//! Card containers: positioned draw stacks and decks.
//!
//! Both are plain LIFO holders owned by the surrounding game. Foundations
//! never reach into them; cards are popped here and then offered there.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, DeckTag, Rank, Suit, TWO_DECK_SIZE};
use crate::error::StackError;

/// Lowest valid draw stack position.
pub const MIN_STACK_POSITION: u8 = 1;

/// Highest valid draw stack position.
pub const MAX_STACK_POSITION: u8 = 13;

fn take_at(cards: &mut Vec<Card>, index: usize) -> Result<Card, StackError> {
    if index >= cards.len() {
        return Err(StackError::IndexOutOfRange {
            index,
            len: cards.len(),
        });
    }
    Ok(cards.remove(index))
}

/// A draw stack at a fixed table position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStack {
    position: u8,
    cards: Vec<Card>,
}

impl CardStack {
    /// Creates an empty stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::InvalidPosition`] if `position` is outside 1..=13.
    pub const fn new(position: u8) -> Result<Self, StackError> {
        if position < MIN_STACK_POSITION || position > MAX_STACK_POSITION {
            return Err(StackError::InvalidPosition(position));
        }

        Ok(Self {
            position,
            cards: Vec::new(),
        })
    }

    /// Returns the position of the stack.
    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Puts a card on top of the stack.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack holds no cards.
    pub fn pop(&mut self) -> Result<Card, StackError> {
        self.cards.pop().ok_or(StackError::Empty)
    }

    /// Removes and returns the card at `index`, counted from the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfRange`] if there is no card at `index`.
    /// The stack is unchanged in that case.
    pub fn take(&mut self, index: usize) -> Result<Card, StackError> {
        take_at(&mut self.cards, index)
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards from bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the labels of all cards from bottom to top.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(Card::label).collect()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a CardStack {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An unpositioned pile of cards, drawn from the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates one full deck with the given tag, ordered by suit then rank.
    ///
    /// The last card pushed (Spades King) is on top.
    #[must_use]
    pub fn standard(tag: DeckTag) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        push_standard(&mut cards, tag);
        Self { cards }
    }

    /// Creates both decks, A below B: every one of the 104 card identities
    /// exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Deck, TWO_DECK_SIZE};
    ///
    /// let deck = Deck::two_decks();
    /// assert_eq!(deck.len(), TWO_DECK_SIZE);
    /// ```
    #[must_use]
    pub fn two_decks() -> Self {
        let mut cards = Vec::with_capacity(TWO_DECK_SIZE);
        for tag in DeckTag::ALL {
            push_standard(&mut cards, tag);
        }
        Self { cards }
    }

    /// Puts a card on top of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the deck holds no cards.
    pub fn pop(&mut self) -> Result<Card, StackError> {
        self.cards.pop().ok_or(StackError::Empty)
    }

    /// Removes and returns the card at `index`, counted from the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfRange`] if there is no card at `index`.
    pub fn take(&mut self, index: usize) -> Result<Card, StackError> {
        take_at(&mut self.cards, index)
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards from bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the labels of all cards from bottom to top.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(Card::label).collect()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn push_standard(cards: &mut Vec<Card>, tag: DeckTag) {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank, tag));
        }
    }
}
