//! The stock of undealt cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Suit, Value};
use crate::random::RandomSource;

/// An ordered pile of cards; cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in suit-major, value-minor order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(value, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, front first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the deck with its cards uniformly permuted.
    ///
    /// Position `i` is swapped with a random position in `i..len`, so a
    /// source that always answers zero leaves the order unchanged.
    #[must_use]
    pub fn shuffle<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Self {
        let len = self.cards.len();
        for i in 0..len {
            let j = i + rng.next_index(len - i);
            self.cards.swap(i, j);
        }
        self
    }

    /// Removes and returns up to `n` cards from the front.
    ///
    /// Returns fewer than `n` (possibly none) when the deck runs short.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Removes and returns the front card, if any.
    pub fn draw_one(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
