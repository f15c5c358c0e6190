//! Players, their hands and their books.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::trace;

use crate::card::{BOOK_SIZE, Card, Value};
use crate::deck::Deck;
use crate::options::DEFAULT_HAND_SIZE;
use crate::random::RandomSource;

/// Index of a player within a game; the human is always `0`.
pub type PlayerId = usize;

/// A Go Fish player.
///
/// The hand never holds a full book: as soon as a fourth card of a value
/// arrives, all four move to [`Player::books`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    books: Vec<Value>,
    hand_size: usize,
}

impl Player {
    /// Creates a player with an empty hand that replenishes to the default
    /// hand size.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_hand_size(name, DEFAULT_HAND_SIZE)
    }

    /// Creates a player with an empty hand that replenishes to `hand_size`.
    #[must_use]
    pub fn with_hand_size(name: impl Into<String>, hand_size: usize) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            books: Vec::new(),
            hand_size,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the values of the completed books, in completion order.
    #[must_use]
    pub fn books(&self) -> &[Value] {
        &self.books
    }

    /// Returns how many cards in hand have `value`.
    #[must_use]
    pub fn count_of(&self, value: Value) -> usize {
        self.hand.iter().filter(|card| card.value == value).count()
    }

    /// Returns the distinct values in hand, lowest first.
    #[must_use]
    pub fn values_in_hand(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.hand.iter().map(|card| card.value).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Deals a fresh hand from `stock` if the hand is empty.
    ///
    /// Draws up to the hand size (fewer if the stock runs short) and pulls
    /// out any book that happens to be dealt. Returns the number of cards
    /// drawn.
    pub fn get_next_hand(&mut self, stock: &mut Deck) -> usize {
        if !self.hand.is_empty() {
            return 0;
        }
        let cards = stock.draw(self.hand_size);
        let drawn = cards.len();
        trace!("{} drew a new hand of {drawn} cards", self.name);
        self.add_cards_and_pull_out_books(cards);
        drawn
    }

    /// Gives up every card of `value`.
    ///
    /// If that empties the hand, a new hand is drawn from `stock` before
    /// returning.
    pub fn do_you_have_any(&mut self, value: Value, stock: &mut Deck) -> Vec<Card> {
        let (matching, kept): (Vec<Card>, Vec<Card>) =
            self.hand.drain(..).partition(|card| card.value == value);
        self.hand = kept;
        if self.hand.is_empty() {
            self.get_next_hand(stock);
        }
        matching
    }

    /// Adds `cards` to the hand, then pulls out any completed books.
    ///
    /// Returns the values of the books completed by this call.
    pub fn add_cards_and_pull_out_books(
        &mut self,
        cards: impl IntoIterator<Item = Card>,
    ) -> Vec<Value> {
        self.hand.extend(cards);
        self.pull_out_books()
    }

    /// Moves every value held [`BOOK_SIZE`] times from hand to books.
    ///
    /// Returns the values of the books completed; calling it again without
    /// adding cards returns nothing.
    pub fn pull_out_books(&mut self) -> Vec<Value> {
        let completed: Vec<Value> = self
            .values_in_hand()
            .into_iter()
            .filter(|&value| self.count_of(value) >= BOOK_SIZE)
            .collect();
        for &value in &completed {
            self.hand.retain(|card| card.value != value);
            debug_assert!(!self.books.contains(&value), "{value} booked twice");
            self.books.push(value);
            trace!("{} completed a book of {}", self.name, value.plural());
        }
        completed
    }

    /// Draws a single card from `stock` and pulls out any completed book.
    ///
    /// Returns the card drawn, or `None` when the stock is empty.
    pub fn draw_card(&mut self, stock: &mut Deck) -> Option<Card> {
        let card = stock.draw_one()?;
        self.add_cards_and_pull_out_books([card]);
        Some(card)
    }

    /// Picks a value uniformly from the distinct values in hand.
    ///
    /// # Panics
    ///
    /// Panics if the hand is empty.
    pub fn random_value_from_hand<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Value {
        let values = self.values_in_hand();
        assert!(
            !values.is_empty(),
            "{} has no cards to pick a value from",
            self.name
        );
        values[rng.next_index(values.len())]
    }

    /// Returns "`<name>` has `<n>` cards and `<m>` books".
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "{} has {} card{} and {} book{}",
            self.name,
            self.hand.len(),
            plural_s(self.hand.len()),
            self.books.len(),
            plural_s(self.books.len()),
        )
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Returns `"s"` unless `count` is exactly one.
pub(crate) const fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::Suit;

    fn card(value: Value, suit: Suit) -> Card {
        Card::new(value, suit)
    }

    #[test]
    fn fourth_card_moves_to_books() {
        let mut player = Player::new("Ana");
        player.add_cards_and_pull_out_books([
            card(Value::Nine, Suit::Diamonds),
            card(Value::Nine, Suit::Clubs),
            card(Value::Two, Suit::Clubs),
        ]);
        assert!(player.books().is_empty());

        let books = player.add_cards_and_pull_out_books([
            card(Value::Nine, Suit::Hearts),
            card(Value::Nine, Suit::Spades),
        ]);
        assert_eq!(books, vec![Value::Nine]);
        assert_eq!(player.books(), &[Value::Nine]);
        assert_eq!(player.hand(), &[card(Value::Two, Suit::Clubs)]);
        assert!(player.pull_out_books().is_empty());
    }

    #[test]
    fn several_books_in_one_call() {
        let mut player = Player::new("Ana");
        let cards: Vec<Card> = Suit::ALL
            .into_iter()
            .flat_map(|suit| [card(Value::Jack, suit), card(Value::Ace, suit)])
            .collect();
        let books = player.add_cards_and_pull_out_books(cards);
        assert_eq!(books, vec![Value::Ace, Value::Jack]);
        assert!(player.hand().is_empty());
    }

    #[test]
    fn status_text() {
        let mut player = Player::new("Owen");
        let mut stock = Deck::new();
        assert_eq!(player.get_next_hand(&mut stock), 5);
        assert_eq!(player.status(), "Owen has 5 cards and 0 books");
    }
}
