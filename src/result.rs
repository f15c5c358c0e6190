//! Result types for a finished game.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::player::PlayerId;

/// A player who finished with the most books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    /// The player ID.
    pub player_id: PlayerId,
    /// The player's name.
    pub name: String,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Players tied on the highest book count, in seating order.
    pub winners: Vec<Winner>,
    /// The winning book count.
    pub books: usize,
}

impl GameResult {
    /// Returns whether more than one player shares the win.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winners.as_slice() {
            [] => Ok(()),
            [winner] => write!(f, "The winner is {}", winner.name),
            [first, rest @ ..] => {
                write!(f, "The winners are {}", first.name)?;
                for winner in rest {
                    write!(f, " and {}", winner.name)?;
                }
                Ok(())
            }
        }
    }
}
