//! Card ranks and their display labels.

use core::fmt;

use crate::error::CardError;

/// Card rank, from [`Rank::Two`] (lowest) to [`Rank::Ace`] (highest).
///
/// Discriminants follow the conventional index scheme 2..=14, leaving
/// 0 and 1 reserved. The derived order matches declaration order, so
/// ranks compare the way the indices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace (highest).
    Ace = 14,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank index (2..=14).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Builds a rank from its index.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `index` is outside 2..=14.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::{CardError, Rank};
    ///
    /// assert_eq!(Rank::from_index(12), Ok(Rank::Queen));
    /// assert_eq!(Rank::from_index(1), Err(CardError::InvalidRank(1)));
    /// ```
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            14 => Ok(Self::Ace),
            _ => Err(CardError::InvalidRank(index)),
        }
    }

    /// Returns the display label, e.g. `"2"` or `"Queen"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
