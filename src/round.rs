//! Round resolution: one player asks another for a value.
//!
//! [`play_round`] computes and applies the outcome and returns a
//! [`RoundEvent`]. Rendering is kept separate: the event's
//! [`Display`](core::fmt::Display) impl produces the narration.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::card::Value;
use crate::deck::Deck;
use crate::player::{Player, plural_s};

/// What happened after the target was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The target handed over `count` matching cards.
    Transfer {
        /// Number of cards handed over.
        count: usize,
    },
    /// The target had none and the stock was empty.
    StockEmpty,
    /// The target had none and the asker drew a card.
    Drew,
}

/// Record of a single resolved ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEvent {
    /// Name of the player who asked.
    pub asker: String,
    /// Name of the player who was asked.
    pub target: String,
    /// The value asked for.
    pub value: Value,
    /// How the ask resolved.
    pub outcome: RoundOutcome,
    /// Books the asker completed during the round.
    pub books: Vec<Value>,
    /// Cards drawn by the asker after running out, if they ran out.
    pub replenished: Option<usize>,
}

impl RoundEvent {
    /// Returns the number of cards that changed hands.
    #[must_use]
    pub const fn transferred(&self) -> usize {
        match self.outcome {
            RoundOutcome::Transfer { count } => count,
            RoundOutcome::StockEmpty | RoundOutcome::Drew => 0,
        }
    }
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} has asked {} for {}",
            self.asker,
            self.target,
            self.value.plural()
        )?;
        match self.outcome {
            RoundOutcome::Transfer { count } => write!(
                f,
                "{} has {count} {} card{}",
                self.target,
                self.value,
                plural_s(count)
            )?,
            RoundOutcome::StockEmpty => f.write_str("The stock is out of cards")?,
            RoundOutcome::Drew => write!(f, "{} drew a card", self.asker)?,
        }
        if let Some(drawn) = self.replenished {
            write!(
                f,
                "\n{} ran out of cards, drew {drawn} from the stock",
                self.asker
            )?;
        }
        Ok(())
    }
}

/// Resolves `asker` asking `target` for every card of `value`.
///
/// Matching cards go to the asker; otherwise the asker draws from `stock`
/// if it has cards. An asker left with an empty hand is dealt a new one.
pub fn play_round(
    asker: &mut Player,
    target: &mut Player,
    value: Value,
    stock: &mut Deck,
) -> RoundEvent {
    let cards = target.do_you_have_any(value, stock);
    let mut books = Vec::new();

    let outcome = if cards.is_empty() {
        if stock.is_empty() {
            RoundOutcome::StockEmpty
        } else {
            let before = asker.books().len();
            asker.draw_card(stock);
            books.extend_from_slice(&asker.books()[before..]);
            RoundOutcome::Drew
        }
    } else {
        let count = cards.len();
        books.extend(asker.add_cards_and_pull_out_books(cards));
        RoundOutcome::Transfer { count }
    };

    let replenished = if asker.hand().is_empty() {
        let before = asker.books().len();
        let drawn = asker.get_next_hand(stock);
        books.extend_from_slice(&asker.books()[before..]);
        Some(drawn)
    } else {
        None
    };

    let event = RoundEvent {
        asker: asker.name().into(),
        target: target.name().into(),
        value,
        outcome,
        books,
        replenished,
    };
    debug!(
        "{} asked {} for {}: {:?}",
        event.asker,
        event.target,
        value.plural(),
        event.outcome
    );
    event
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::card::{Card, Suit};

    fn player_with(name: &str, cards: &[Card]) -> Player {
        let mut player = Player::new(name);
        player.add_cards_and_pull_out_books(cards.iter().copied());
        player
    }

    #[test]
    fn transfer_completes_a_book() {
        let mut asker = player_with(
            "Ana",
            &[
                Card::new(Value::Ten, Suit::Clubs),
                Card::new(Value::Ten, Suit::Hearts),
                Card::new(Value::Two, Suit::Hearts),
            ],
        );
        let mut target = player_with(
            "Bo",
            &[
                Card::new(Value::Ten, Suit::Spades),
                Card::new(Value::Ten, Suit::Diamonds),
                Card::new(Value::Four, Suit::Clubs),
            ],
        );
        let mut stock = Deck::new();
        let event = play_round(&mut asker, &mut target, Value::Ten, &mut stock);

        assert_eq!(event.outcome, RoundOutcome::Transfer { count: 2 });
        assert_eq!(event.books, vec![Value::Ten]);
        assert_eq!(event.replenished, None);
        assert_eq!(asker.books(), &[Value::Ten]);
        assert_eq!(target.hand().len(), 1);
        assert_eq!(stock.len(), 52);
        assert_eq!(
            event.to_string(),
            "Ana has asked Bo for Tens\nBo has 2 Ten cards"
        );
    }

    #[test]
    fn empty_stock_and_no_match() {
        let mut asker = player_with("Ana", &[Card::new(Value::Six, Suit::Clubs)]);
        let mut target = player_with("Bo", &[Card::new(Value::King, Suit::Clubs)]);
        let mut stock = Deck::empty();
        let event = play_round(&mut asker, &mut target, Value::Six, &mut stock);

        assert_eq!(event.outcome, RoundOutcome::StockEmpty);
        assert_eq!(event.transferred(), 0);
        assert_eq!(
            event.to_string(),
            "Ana has asked Bo for Sixes\nThe stock is out of cards"
        );
    }

    #[test]
    fn asker_with_empty_hand_replenishes() {
        // An asker holding no cards finds none and the stock is dry.
        let mut asker = Player::new("Ana");
        let mut target = player_with("Bo", &[Card::new(Value::King, Suit::Clubs)]);
        let mut stock = Deck::empty();
        let event = play_round(&mut asker, &mut target, Value::Three, &mut stock);

        assert_eq!(event.replenished, Some(0));
        assert_eq!(
            event.to_string(),
            "Ana has asked Bo for Threes\n\
             The stock is out of cards\n\
             Ana ran out of cards, drew 0 from the stock"
        );
    }

    #[test]
    fn emptied_target_redraws() {
        let mut asker = player_with("Ana", &[Card::new(Value::Five, Suit::Clubs)]);
        let mut target = player_with("Bo", &[Card::new(Value::Five, Suit::Hearts)]);
        let mut stock = Deck::new();
        let event = play_round(&mut asker, &mut target, Value::Five, &mut stock);

        assert_eq!(event.outcome, RoundOutcome::Transfer { count: 1 });
        assert_eq!(target.hand().len(), 5);
        assert_eq!(stock.len(), 47);
        assert_eq!(asker.count_of(Value::Five), 2);
    }
}
