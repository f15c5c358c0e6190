use alloc::string::String;
use alloc::vec::Vec;

use log::info;

use crate::random::RandomSource;
use crate::result::{GameResult, Winner};

use super::Game;

impl<R: RandomSource> Game<R> {
    /// Ends the game once every hand is empty and reports the winners.
    ///
    /// Returns `None` while any player still holds cards. Otherwise marks
    /// the game over and returns the players with the most books, in
    /// seating order.
    pub fn check_for_winner(&mut self) -> Option<GameResult> {
        if self.players.iter().any(|p| !p.hand().is_empty()) {
            return None;
        }

        let books = self
            .players
            .iter()
            .map(|p| p.books().len())
            .max()
            .unwrap_or(0);
        let winners: Vec<Winner> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.books().len() == books)
            .map(|(player_id, p)| Winner {
                player_id,
                name: String::from(p.name()),
            })
            .collect();
        let result = GameResult { winners, books };

        if !self.game_over {
            self.game_over = true;
            info!("game over: {result}");
        }
        Some(result)
    }
}
