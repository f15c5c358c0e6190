//! Game configuration options.

/// Number of cards dealt to a player whose hand is empty.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default().with_hand_size(7);
/// assert_eq!(options.hand_size, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt at the start and whenever a hand runs out.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}
