//! The card value type.

use core::fmt;

use alloc::string::{String, ToString};

use crate::error::CardError;
use crate::rank::Rank;
use crate::suit::{Color, Suit};

/// A playing card.
///
/// Immutable once constructed. The derived order compares rank first,
/// then suit as a tie-break (field order matters here), giving a total
/// order over all 52 cards.
///
/// ```
/// use cardstock::{Card, Rank, Suit};
///
/// let ten_of_spades = Card::new(Rank::Ten, Suit::Spades);
/// let ten_of_hearts = Card::new(Rank::Ten, Suit::Hearts);
/// assert!(ten_of_spades < ten_of_hearts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from raw rank and suit indices.
    ///
    /// The rank index uses the conventional 2..=14 scheme (Ace high),
    /// the suit index is 0..=3 in tie-break order. Rank is validated
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`]
    /// if the corresponding index is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::{Card, Rank, Suit};
    ///
    /// let card = Card::from_indices(12, 2)?;
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Diamonds));
    /// # Ok::<(), cardstock::CardError>(())
    /// ```
    pub const fn from_indices(rank: u8, suit: u8) -> Result<Self, CardError> {
        let rank = match Rank::from_index(rank) {
            Ok(rank) => rank,
            Err(e) => return Err(e),
        };
        let suit = match Suit::from_index(suit) {
            Ok(suit) => suit,
            Err(e) => return Err(e),
        };
        Ok(Self { rank, suit })
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the color of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Returns the display form, e.g. `"Queen of hearts"`.
    #[must_use]
    pub fn to_display_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.label(), self.suit.name())
    }
}
