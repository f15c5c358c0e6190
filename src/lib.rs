//! A Go Fish game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that seats one human against any
//! number of computer opponents, resolves each ask, draws from the stock,
//! pulls out books and reports the winners once every hand is empty.
//! Randomness is injected through [`RandomSource`], so games can be
//! replayed exactly.
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameOptions, Value};
//!
//! let mut game = Game::new(GameOptions::default(), "Owen", ["Brittney"], 42);
//! let status = game.next_round(1, Value::Six).unwrap();
//! assert!(status.starts_with("Owen has asked Brittney for Sixes"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod random;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{BOOK_SIZE, Card, DECK_SIZE, Suit, Value, compare_by_value};
pub use deck::Deck;
pub use error::RoundError;
pub use game::{Game, HUMAN};
pub use options::{DEFAULT_HAND_SIZE, GameOptions};
pub use player::{Player, PlayerId};
pub use random::{FirstChoice, RandomSource, SeededRandom};
pub use result::{GameResult, Winner};
pub use round::{RoundEvent, RoundOutcome, play_round};
