//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when building a card from raw indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank index is outside the valid range 2..=14.
    #[error("invalid rank index {0} (valid range is 2..=14)")]
    InvalidRank(u8),
    /// Suit index is outside the valid range 0..=3.
    #[error("invalid suit index {0} (valid range is 0..=3)")]
    InvalidSuit(u8),
}
