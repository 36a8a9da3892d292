// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerbot odds calculators.
//!
//! The [OddsCalculator] enumerates all the hands a player can have after the
//! next street is dealt given the hole cards and the board. The enumeration
//! uses a [CombinationIndex] of the unseen cards slots for each street, built
//! once and shared by all calculations, that is projected on the actual unseen
//! cards:
//!
//! ```
//! # use pokerbot_odds::*;
//! let hole = ["AH".parse().unwrap(), "KH".parse().unwrap()];
//! let table = OddsCalculator::default().flop(hole).unwrap();
//! assert_eq!(table.len(), 19600);
//!
//! // Flopping a flush with suited cards.
//! let p = table.probability(OddsRow::flush);
//! assert!((p - 0.0084).abs() < 1e-4);
//! ```
//!
//! The [math] module has closed form probabilities that don't need the full
//! enumeration, i.e. hitting three of a kind with a pocket pair by the river:
//!
//! ```
//! # use pokerbot_odds::math::*;
//! let p = OutsDraw::new(2, 5).probability().unwrap();
//! assert!((p - 0.1918).abs() < 1e-4);
//! ```
//!
//! The **`parallel`** feature enables projecting the flop tables of all hole
//! cards pairs with a given number of tasks:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each_hole() {
//! # use std::sync::atomic;
//! # use pokerbot_odds::*;
//! let counter = atomic::AtomicU64::new(0);
//! OddsCalculator::default().par_for_each_hole(4, |_task_id, _hole, _table| {
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 1326);
//! # }
//! # #[cfg(feature = "parallel")]
//! # par_for_each_hole();
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::OddsError;

mod index;
pub use index::{CombinationIndex, Street};

pub mod math;
pub use math::{OutsDraw, hit_probability};

mod odds;
pub use odds::{OddsCalculator, OddsRow, OddsTable};

#[cfg(feature = "parallel")]
mod parallel;

// Reexport cards types.
pub use pokerbot_cards::{Card, Rank, Suit, UNIVERSE};
