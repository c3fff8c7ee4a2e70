//! A set of foundations shared by the surrounding game.
//!
//! [`Table`] owns every foundation behind its own lock, so callers on
//! different threads can offer cards to different foundations at once while
//! each single foundation still sees one writer at a time. It also keeps the
//! deck-tag bookkeeping: which exact card identities already sit on a
//! foundation.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::card::{Card, Rank, Suit};
use crate::error::TableError;
use crate::foundation::{FoundationPile, Placement};
use crate::options::{FoundationConfig, TableOptions};
use crate::sync::Mutex;

/// Which card identities sit on foundations, and which are being offered.
#[derive(Default)]
struct Ledger {
    /// Copies of each card on foundations. Above one only when duplicates
    /// are allowed.
    placed: HashMap<Card, usize>,
    /// Cards with an offer in flight. Only used when duplicates are refused.
    pending: HashSet<Card>,
}

/// Foundations of one game, addressed by position.
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Foundation positions, sorted, parallel to `foundations`.
    positions: Vec<u8>,
    /// Foundations, one lock each.
    foundations: Vec<Mutex<FoundationPile>>,
    /// Placed and in-flight card identities.
    ledger: Mutex<Ledger>,
}

impl Table {
    /// Creates a table with empty foundations.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Foundation`] if a foundation config is invalid and
    /// [`TableError::DuplicatePosition`] if two configs share a position.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default()).unwrap();
    /// assert_eq!(table.positions(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn new(options: TableOptions) -> Result<Self, TableError> {
        let mut piles = options
            .foundations
            .iter()
            .map(FoundationConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        piles.sort_by_key(FoundationPile::position);

        if let Some(pair) = piles
            .windows(2)
            .find(|pair| pair[0].position() == pair[1].position())
        {
            return Err(TableError::DuplicatePosition(pair[0].position()));
        }

        log::debug!("table set up with {} foundations", piles.len());

        Ok(Self {
            options,
            positions: piles.iter().map(FoundationPile::position).collect(),
            foundations: piles.into_iter().map(Mutex::new).collect(),
            ledger: Mutex::new(Ledger::default()),
        })
    }

    fn index_of(&self, position: u8) -> Result<usize, TableError> {
        self.positions
            .binary_search(&position)
            .map_err(|_| TableError::PositionNotFound(position))
    }

    /// Marks `card` as in flight when duplicates are refused. Fails if the
    /// card is already placed or another offer of it is in flight.
    fn reserve(&self, card: Card) -> Result<(), TableError> {
        if !self.options.reject_duplicates {
            return Ok(());
        }

        let mut ledger = self.ledger.lock();
        if ledger.placed.contains_key(&card) {
            log::warn!("card {card} offered again while already on a foundation");
            return Err(TableError::CardAlreadyPlaced(card));
        }
        if !ledger.pending.insert(card) {
            log::warn!("card {card} offered while another offer of it is in flight");
            return Err(TableError::OfferInProgress(card));
        }
        Ok(())
    }

    /// Ends the offer of `card`, recording it as placed if it was accepted.
    fn settle(&self, card: Card, accepted: bool) {
        let mut ledger = self.ledger.lock();
        ledger.pending.remove(&card);
        if accepted {
            *ledger.placed.entry(card).or_insert(0) += 1;
        }
    }

    fn offer_at(&self, index: usize, card: Card) -> Placement {
        self.foundations[index].lock().try_accept(card)
    }

    /// Offers a card to the foundation at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::PositionNotFound`] if no foundation sits at
    /// `position`. When duplicate rejection is on, returns
    /// [`TableError::CardAlreadyPlaced`] if this exact card is already on a
    /// foundation and [`TableError::OfferInProgress`] if another caller is
    /// offering it right now. None of these change any foundation.
    ///
    /// # Example
    ///
    /// ```
    /// use abpatience::{Card, DeckTag, Placement, Rank, Suit, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default()).unwrap();
    /// let ace = Card::new(Suit::Hearts, Rank::Ace, DeckTag::A);
    /// assert_eq!(table.offer(1, ace), Ok(Placement::Accepted));
    /// ```
    pub fn offer(&self, position: u8, card: Card) -> Result<Placement, TableError> {
        let index = self.index_of(position)?;
        self.reserve(card)?;

        let placement = self.offer_at(index, card);
        self.settle(card, placement.is_accepted());

        log::debug!("offered {card} to foundation {position}: {placement:?}");
        Ok(placement)
    }

    /// Offers a card to every foundation in position order and returns the
    /// position of the first one that accepted it.
    ///
    /// Returns `Ok(None)` if no foundation takes the card.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::CardAlreadyPlaced`] or
    /// [`TableError::OfferInProgress`] as [`offer`](Self::offer) does.
    pub fn auto_place(&self, card: Card) -> Result<Option<u8>, TableError> {
        self.reserve(card)?;

        let accepted = (0..self.foundations.len())
            .find(|&index| self.offer_at(index, card).is_accepted())
            .map(|index| self.positions[index]);
        self.settle(card, accepted.is_some());

        match accepted {
            Some(position) => log::debug!("auto-placed {card} on foundation {position}"),
            None => log::debug!("no foundation takes {card}"),
        }

        Ok(accepted)
    }

    /// Returns a copy of the foundation at `position`.
    #[must_use]
    pub fn foundation(&self, position: u8) -> Option<FoundationPile> {
        let index = self.index_of(position).ok()?;
        Some(self.foundations[index].lock().clone())
    }

    /// Returns copies of all foundations in position order.
    #[must_use]
    pub fn foundations(&self) -> Vec<FoundationPile> {
        self.foundations
            .iter()
            .map(|pile| pile.lock().clone())
            .collect()
    }

    /// Returns the suit and rank the foundation at `position` expects next.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::PositionNotFound`] if no foundation sits at
    /// `position`.
    pub fn expected_next(&self, position: u8) -> Result<Option<(Suit, Rank)>, TableError> {
        let index = self.index_of(position)?;
        Ok(self.foundations[index].lock().expected_next())
    }

    /// Returns the foundation positions in ascending order.
    #[must_use]
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns whether this exact card is on a foundation.
    #[must_use]
    pub fn is_placed(&self, card: Card) -> bool {
        self.copies_placed(card) > 0
    }

    /// Returns how many copies of this exact card are on foundations. Only
    /// exceeds one when duplicates are allowed.
    #[must_use]
    pub fn copies_placed(&self, card: Card) -> usize {
        self.ledger.lock().placed.get(&card).copied().unwrap_or(0)
    }

    /// Returns the total number of cards on all foundations.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.foundations.iter().map(|pile| pile.lock().len()).sum()
    }

    /// Returns whether every foundation is full.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.foundations.iter().all(|pile| pile.lock().is_full())
    }

    /// Consumes the table and returns its foundations in position order.
    #[must_use]
    pub fn into_foundations(self) -> Vec<FoundationPile> {
        self.foundations.into_iter().map(Mutex::into_inner).collect()
    }
}
