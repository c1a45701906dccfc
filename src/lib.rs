//! Playing card value types with optional `no_std` support.
//!
//! The crate provides an immutable [`Card`] type (a rank and a suit)
//! with a total order, display conversion, and suit color lookup. It is
//! intended as a building block for deck, hand, and game-flow modules
//! layered on top.
//!
//! Cards compare by rank first, then by suit as a tie-break:
//!
//! ```
//! use cardstock::{Card, Rank, Suit};
//!
//! let king = Card::new(Rank::King, Suit::Spades);
//! let ace = Card::new(Rank::Ace, Suit::Hearts);
//! assert!(king < ace);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod rank;
pub mod suit;

// Re-export main types
pub use card::Card;
pub use error::CardError;
pub use rank::Rank;
pub use suit::{Color, Suit};
