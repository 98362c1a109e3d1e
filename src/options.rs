//! Table configuration options.

use crate::shoe::SHOE_SIZE;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hpjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shoe_size(104)
///     .with_max_players(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of cards picked from the catalog into the shoe.
    pub shoe_size: usize,
    /// Maximum number of seated players.
    pub max_players: usize,
    /// Minimum number of players needed to start.
    pub min_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shoe_size: SHOE_SIZE,
            max_players: 6,
            min_players: 2,
        }
    }
}

impl GameOptions {
    /// Sets the shoe size.
    ///
    /// # Example
    ///
    /// ```
    /// use hpjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_shoe_size(52);
    /// assert_eq!(options.shoe_size, 52);
    /// ```
    #[must_use]
    pub const fn with_shoe_size(mut self, size: usize) -> Self {
        self.shoe_size = size;
        self
    }

    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use hpjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(2);
    /// assert_eq!(options.max_players, 2);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Sets the minimum number of players needed to start.
    ///
    /// # Example
    ///
    /// ```
    /// use hpjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(1);
    /// assert_eq!(options.min_players, 1);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }
}
