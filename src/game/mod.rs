//! Game engine and turn orchestration.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use log::info;

use crate::card::BOOK_SIZE;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::random::{RandomSource, SeededRandom};
use crate::round::RoundEvent;

mod turns;
mod winner;

/// Player ID of the human player.
pub const HUMAN: PlayerId = 0;

/// A Go Fish game between one human and any number of computer opponents.
///
/// The game owns the stock, the players and the random source. Every
/// random decision is drawn from the source `R`, so two games built with
/// equal sources play out identically.
#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = SeededRandom> {
    options: GameOptions,
    /// Human first, then opponents in the order given.
    players: Vec<Player>,
    stock: Deck,
    game_over: bool,
    status: String,
    /// Rounds resolved by the most recent call to `next_round`.
    rounds: Vec<RoundEvent>,
    rng: R,
}

impl Game<SeededRandom> {
    /// Creates a new game with the given seed and deals the opening hands.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), "Owen", ["Brittney", "Ana"], 42);
    /// assert_eq!(game.opponents().len(), 2);
    /// assert_eq!(game.stock().len(), 52 - 15);
    /// ```
    #[must_use]
    pub fn new<S: Into<String>>(
        options: GameOptions,
        human: impl Into<String>,
        opponents: impl IntoIterator<Item = S>,
        seed: u64,
    ) -> Self {
        Self::with_random(options, human, opponents, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new game drawing randomness from `rng`.
    ///
    /// Names should be unique; duplicates only make the narration ambiguous.
    #[must_use]
    pub fn with_random<S: Into<String>>(
        options: GameOptions,
        human: impl Into<String>,
        opponents: impl IntoIterator<Item = S>,
        rng: R,
    ) -> Self {
        let names: Vec<String> = iter::once(human.into())
            .chain(opponents.into_iter().map(Into::into))
            .collect();

        let mut game = Self {
            options,
            players: Vec::new(),
            stock: Deck::empty(),
            game_over: false,
            status: String::new(),
            rounds: Vec::new(),
            rng,
        };
        game.deal(names);
        game.status = format!(
            "Starting a new game with players {}",
            game.player_names().join(", ")
        );
        info!("{}", game.status);
        game
    }

    /// Creates a game from an existing position.
    ///
    /// The first player is the human. No cards are dealt; `players` and
    /// `stock` are taken as they are.
    #[must_use]
    pub const fn from_parts(
        options: GameOptions,
        players: Vec<Player>,
        stock: Deck,
        rng: R,
    ) -> Self {
        Self {
            options,
            players,
            stock,
            game_over: false,
            status: String::new(),
            rounds: Vec::new(),
            rng,
        }
    }

    /// Shuffles a fresh deck and deals a hand to each named player in turn.
    fn deal(&mut self, names: Vec<String>) {
        let hand_size = self.options.hand_size;
        self.stock = Deck::new().shuffle(&mut self.rng);
        self.players = names
            .into_iter()
            .map(|name| Player::with_hand_size(name, hand_size))
            .collect();
        for player in &mut self.players {
            player.get_next_hand(&mut self.stock);
        }
        self.game_over = false;
        self.rounds.clear();
    }

    /// Starts a new game with the same players in the same order.
    pub fn new_game(&mut self) {
        let names = self.player_names();
        self.deal(names);
        self.status = String::from("Starting a new game");
        info!("{}", self.status);
    }

    fn player_names(&self) -> Vec<String> {
        self.players
            .iter()
            .map(|p| String::from(p.name()))
            .collect()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns all players, human first.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Returns the human player.
    ///
    /// # Panics
    ///
    /// Panics if the game was built from parts with no players.
    #[must_use]
    pub fn human(&self) -> &Player {
        &self.players[HUMAN]
    }

    /// Returns the computer opponents in seating order.
    #[must_use]
    pub fn opponents(&self) -> &[Player] {
        self.players.get(HUMAN + 1..).unwrap_or_default()
    }

    /// Returns the stock.
    #[must_use]
    pub const fn stock(&self) -> &Deck {
        &self.stock
    }

    /// Returns whether every hand has run out.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the narration produced by the last operation.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the rounds resolved by the last call to `next_round`.
    #[must_use]
    pub fn rounds(&self) -> &[RoundEvent] {
        &self.rounds
    }

    /// Counts every card in hands, books and the stock.
    ///
    /// For a game dealt from a full deck this is always
    /// [`DECK_SIZE`](crate::DECK_SIZE).
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|p| p.hand().len() + p.books().len() * BOOK_SIZE)
            .sum();
        held + self.stock.len()
    }
}
