//! Per-row tile feedback
//!
//! A feedback row is five tiles, each gray (`-`), yellow (`y`) or green (`g`).
//! Rows are kept as explicit tiles rather than packed into a number because the
//! constraint rules compare individual slots across adjacent rows.

use super::word::WORD_LEN;
use std::fmt;

/// The colour of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Letter is not in the solution
    Gray,
    /// Letter is in the solution, but in another slot
    Yellow,
    /// Letter is in the solution at this slot
    Green,
}

impl Tile {
    /// Parse a single tile symbol
    ///
    /// Accepts `g`/`G`/🟩, `y`/`Y`/🟨 and `-`/`_`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Green),
            'y' | 'Y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }

    /// The symbol used in puzzle files
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Gray => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }

    /// Green or yellow: the letter is confirmed present in the solution
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }
}

/// Error type for unparseable feedback rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "feedback must be exactly {WORD_LEN} tiles, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "invalid feedback symbol '{ch}' (expected '-', 'y' or 'g')")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for one guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tile; WORD_LEN]);

impl Feedback {
    /// Every tile green: the feedback the solution row gives itself
    pub const ALL_GREEN: Self = Self([Tile::Green; WORD_LEN]);

    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LEN]) -> Self {
        Self(tiles)
    }

    /// Parse a row such as `"g-y--"`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the row is not five valid tile symbols.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{Feedback, Tile};
    ///
    /// let row = Feedback::parse("g-y--").unwrap();
    /// assert_eq!(row.tile(0), Tile::Green);
    /// assert_eq!(row.tile(2), Tile::Yellow);
    /// assert_eq!(row, Feedback::parse("🟩⬜🟨⬜⬜").unwrap());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let len = s.chars().count();
        if len != WORD_LEN {
            return Err(FeedbackError::InvalidLength(len));
        }

        let mut tiles = [Tile::Gray; WORD_LEN];
        for (tile, ch) in tiles.iter_mut().zip(s.chars()) {
            *tile = Tile::from_char(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self(tiles))
    }

    /// Tile at a slot (0-4)
    ///
    /// # Panics
    /// Panics if `slot >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn tile(&self, slot: usize) -> Tile {
        self.0[slot]
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_all_green(&self) -> bool {
        *self == Self::ALL_GREEN
    }

    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.0.iter().filter(|&&t| t == tile).count()
    }

    /// Render as emoji squares, e.g. "🟩⬜🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
