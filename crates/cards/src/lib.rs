// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerbot cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use pokerbot_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10D".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(td.name(), "10 of Diamonds");
//! ```
//!
//! the static [UNIVERSE] of all 52 cards sorted by rank and suit, and a [Deck]
//! type for shuffling and dealing cards:
//!
//! ```
//! # use pokerbot_cards::{Card, Deck};
//! let mut deck = Deck::new();
//! let c1 = deck.deal().unwrap();
//! let c2 = deck.deal().unwrap();
//! assert_ne!(c1, c2);
//! assert_eq!(deck.dealt(), &[c1, c2]);
//! assert_eq!(deck.count(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit, UNIVERSE};

mod deck;
pub use deck::Deck;

mod error;
pub use error::CardError;
