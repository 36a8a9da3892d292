// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerbot hand evaluator.
//!
//! Classifies hands of 2 to 7 cards into the ten poker categories, from high
//! card to royal flush, and computes a [HandValue] to compare hands using the
//! category and the kickers. Seven cards hands are valued using the best five
//! cards out of the seven.
//!
//! To use the evaluator create a [Hand] and use a [HandEvaluator] to get its
//! category or its value:
//!
//! ```
//! # use pokerbot_eval::*;
//! let evaluator = HandEvaluator::default();
//! let h1 = "2C 2D 2H 5S 5C".parse::<Hand>().unwrap();
//! let h2 = "2C 2D 2H 3S 4C".parse::<Hand>().unwrap();
//! assert_eq!(evaluator.classify(&h1), HandRank::FullHouse);
//! assert_eq!(evaluator.classify(&h2), HandRank::ThreeOfAKind);
//! assert!(evaluator.eval(&h1) > evaluator.eval(&h2));
//! ```
//!
//! By default an ace only counts as the highest card for straights, use
//! [EvalConfig] to enable A-2-3-4-5 straights:
//!
//! ```
//! # use pokerbot_eval::*;
//! let hand = "AC 2D 3H 4S 5C".parse::<Hand>().unwrap();
//! assert_eq!(HandEvaluator::default().classify(&hand), HandRank::HighCard);
//!
//! let evaluator = HandEvaluator::new(EvalConfig { wheel: true });
//! assert_eq!(evaluator.classify(&hand), HandRank::Straight);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::HandError;

pub mod eval;
pub use eval::{EvalConfig, HandEvaluator, HandRank, HandValue};

mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use pokerbot_cards::{Card, CardError, Deck, Rank, Suit, UNIVERSE};
