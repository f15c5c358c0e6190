use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::debug;

use crate::card::{DECK_SIZE, Value};
use crate::error::RoundError;
use crate::player::{Player, PlayerId};
use crate::random::RandomSource;
use crate::round::{self, RoundEvent, RoundOutcome};

use super::{Game, HUMAN};

/// Upper bound on computer passes per human turn.
const MAX_COMPUTER_PASSES: usize = DECK_SIZE;

/// Borrows two distinct players mutably.
fn pair_mut(players: &mut [Player], a: PlayerId, b: PlayerId) -> (&mut Player, &mut Player) {
    assert_ne!(a, b, "a player cannot ask themselves");
    if a < b {
        let (left, right) = players.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

impl<R: RandomSource> Game<R> {
    /// Picks a player other than `excluding`, uniformly at random.
    ///
    /// # Panics
    ///
    /// Panics if the game has fewer than two players.
    pub fn random_player(&mut self, excluding: PlayerId) -> PlayerId {
        assert!(
            self.players.len() > 1,
            "random_player needs at least two players"
        );
        let pick = self.rng.next_index(self.players.len() - 1);
        if pick >= excluding { pick + 1 } else { pick }
    }

    /// Resolves one ask between two players using this game's stock.
    ///
    /// # Panics
    ///
    /// Panics if `asker` and `target` are the same player or either ID is
    /// out of range.
    pub fn play_round(&mut self, asker: PlayerId, target: PlayerId, value: Value) -> RoundEvent {
        let (asker, target) = pair_mut(&mut self.players, asker, target);
        round::play_round(asker, target, value, &mut self.stock)
    }

    /// Plays the human's turn, then lets the computer players take theirs.
    ///
    /// Returns the narration of every round played, each player's status,
    /// the stock size and, if the game just ended, the winners. The same
    /// text stays available through [`Game::status`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over, `target` is the human,
    /// or `target` is not a player in this game.
    pub fn next_round(&mut self, target: PlayerId, value: Value) -> Result<&str, RoundError> {
        if self.game_over {
            return Err(RoundError::GameOver);
        }
        if target == HUMAN {
            return Err(RoundError::CannotAskSelf);
        }
        if target >= self.players.len() {
            return Err(RoundError::PlayerNotFound);
        }

        self.rounds.clear();
        let event = self.play_round(HUMAN, target, value);
        self.rounds.push(event);

        self.computer_players_play();

        let result = self.check_for_winner();

        let mut lines: Vec<String> = self.rounds.iter().map(ToString::to_string).collect();
        lines.extend(self.players.iter().map(Player::status));
        lines.push(format!("The stock has {} cards", self.stock.len()));
        if let Some(result) = result {
            lines.push(result.to_string());
        }
        self.status = lines.join("\n");

        Ok(self.status.as_str())
    }

    /// Every opponent holding cards asks a random player for a random value
    /// from its hand.
    ///
    /// Passes repeat while the human has no cards and some opponent still
    /// has cards, as long as the previous pass moved at least one card
    /// (a transfer or a draw). Returns the number of passes played.
    pub fn computer_players_play(&mut self) -> usize {
        let mut passes = 0;
        while passes < MAX_COMPUTER_PASSES {
            passes += 1;
            let first_round = self.rounds.len();

            for id in HUMAN + 1..self.players.len() {
                if self.players[id].hand().is_empty() {
                    continue;
                }
                let target = self.random_player(id);
                let value = self.players[id].random_value_from_hand(&mut self.rng);
                let event = self.play_round(id, target, value);
                self.rounds.push(event);
            }

            let progressed = self.rounds[first_round..]
                .iter()
                .any(|event| event.outcome != RoundOutcome::StockEmpty);
            let opponents_have_cards = self.opponents().iter().any(|p| !p.hand().is_empty());
            if !self.human().hand().is_empty() || !opponents_have_cards || !progressed {
                break;
            }
        }
        debug!("computer players played {passes} passes");
        passes
    }
}
