//! Card suits and their colors.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Declaration order is the fixed tie-break order used when comparing
/// cards of equal rank: spades < hearts < diamonds < clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Hearts.
    Hearts = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Clubs.
    Clubs = 3,
}

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

impl Suit {
    /// All suits in tie-break order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit index (0..=3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Builds a suit from its index.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `index` is outside 0..=3.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::{CardError, Suit};
    ///
    /// assert_eq!(Suit::from_index(1), Ok(Suit::Hearts));
    /// assert_eq!(Suit::from_index(4), Err(CardError::InvalidSuit(4)));
    /// ```
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Self::Spades),
            1 => Ok(Self::Hearts),
            2 => Ok(Self::Diamonds),
            3 => Ok(Self::Clubs),
            _ => Err(CardError::InvalidSuit(index)),
        }
    }

    /// Returns the display name, e.g. `"hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }

    /// Returns the color of the suit.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::{Color, Suit};
    ///
    /// assert_eq!(Suit::Hearts.color(), Color::Red);
    /// assert_eq!(Suit::Clubs.color(), Color::Black);
    /// ```
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Spades | Self::Clubs => Color::Black,
        }
    }
}

impl Color {
    /// Returns the display name, `"red"` or `"black"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
