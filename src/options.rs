//! Game configuration options and fixed table constants.

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 4;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Maximum number of rounds in a game (one per card in a hand).
pub const MAX_ROUNDS: u8 = (DECK_SIZE / PLAYER_COUNT) as u8;

/// Configuration options for a game.
///
/// The table itself is fixed (four players, one deck, thirteen rounds); the
/// options only control how the deck is prepared. Use the builder pattern:
///
/// ```
/// use king_of_spades::GameOptions;
///
/// let options = GameOptions::default().with_seed(7).with_shuffle(false);
/// assert_eq!(options.seed, 7);
/// assert!(!options.shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Seed for the shuffle RNG.
    pub seed: u64,
    /// Whether the deck is shuffled before dealing.
    ///
    /// When disabled the deck is dealt in construction order, which makes the
    /// whole game deterministic regardless of the seed.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use king_of_spades::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use king_of_spades::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
