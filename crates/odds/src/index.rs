// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Unseen cards combinations index.
//!
//! For each street the index enumerates all the ways the unseen cards can fill
//! the board cards dealt on that street. The index is a table with one row for
//! each combination and one column for each unseen card slot, a cell is set if
//! the slot is part of the combination:
//!
//! ```text
//!   street   slots   draws   rows
//!   flop     50      3       19600
//!   turn     47      1       47
//!   river    46      1       46
//! ```
//!
//! Slots are generic positions, the [OddsCalculator](crate::OddsCalculator)
//! maps them to the actual unseen cards given the hole and board cards.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock, time::Instant};

use crate::math::{for_each_ksubset, nck};

/// A stage of the community cards reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// The first three board cards.
    Flop,
    /// The fourth board card.
    Turn,
    /// The fifth board card.
    River,
}

impl Street {
    /// Returns all streets in dealing order.
    pub fn streets() -> impl DoubleEndedIterator<Item = Street> {
        [Street::Flop, Street::Turn, Street::River].into_iter()
    }

    /// The street for the number of board cards already revealed.
    pub fn from_board_cards(n: usize) -> Option<Street> {
        match n {
            0 => Some(Street::Flop),
            3 => Some(Street::Turn),
            4 => Some(Street::River),
            _ => None,
        }
    }

    /// The number of board cards revealed before this street is dealt.
    pub const fn board_cards(&self) -> usize {
        match self {
            Street::Flop => 0,
            Street::Turn => 3,
            Street::River => 4,
        }
    }

    /// The number of cards dealt on this street.
    pub const fn draws(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    /// The number of unseen cards before this street is dealt.
    pub const fn unseen(&self) -> usize {
        52 - 2 - self.board_cards()
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{street}")
    }
}

/// A table of all the k-subsets of the unseen card slots.
///
/// Each row is stored as a bit mask with bit `j` set if slot `j` is part of the
/// combination, rows are in lexicographic order of their slot indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationIndex {
    slots: usize,
    draws: usize,
    rows: Vec<u64>,
}

static FLOP_INDEX: LazyLock<CombinationIndex> = LazyLock::new(|| build_street(Street::Flop));
static TURN_INDEX: LazyLock<CombinationIndex> = LazyLock::new(|| build_street(Street::Turn));
static RIVER_INDEX: LazyLock<CombinationIndex> = LazyLock::new(|| build_street(Street::River));

fn build_street(street: Street) -> CombinationIndex {
    let now = Instant::now();
    let index = CombinationIndex::build(street.unseen(), street.draws());
    debug!(
        "Built {street} index with {} rows and {} slots in {:.3}ms",
        index.len(),
        index.slots(),
        now.elapsed().as_secs_f64() * 1000.0
    );
    index
}

impl CombinationIndex {
    /// Builds the index of all `draws`-subsets of `slots` slots.
    ///
    /// Panics if `slots > 64` or `draws > slots`.
    pub fn build(slots: usize, draws: usize) -> Self {
        assert!(slots <= 64, "slots={slots} must be <= 64");
        assert!(draws <= slots, "draws={draws} must be <= slots={slots}");

        let mut rows = Vec::with_capacity(nck(slots as u32, draws as u32) as usize);
        for_each_ksubset(slots, draws, |subset| {
            rows.push(subset.iter().fold(0u64, |mask, &slot| mask | (1 << slot)));
        });

        Self { slots, draws, rows }
    }

    /// Returns the index for a street.
    ///
    /// The index is built on first access and shared by all callers, threads
    /// accessing it while it is being built wait for it to be ready.
    pub fn for_street(street: Street) -> &'static CombinationIndex {
        match street {
            Street::Flop => LazyLock::force(&FLOP_INDEX),
            Street::Turn => LazyLock::force(&TURN_INDEX),
            Street::River => LazyLock::force(&RIVER_INDEX),
        }
    }

    /// The number of slots (columns).
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// The number of slots set in each row.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the index has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows bit masks.
    pub fn rows(&self) -> &[u64] {
        &self.rows
    }

    /// Checks if `slot` is part of the combination at `row`.
    ///
    /// Panics if `row` is out of bounds.
    pub fn contains(&self, row: usize, slot: usize) -> bool {
        slot < self.slots && self.rows[row] & (1 << slot) != 0
    }

    /// The slots in the combination at `row` in increasing order.
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> impl Iterator<Item = usize> {
        set_bits(self.rows[row])
    }
}

/// Iterates the indices of the bits set in a mask from the lowest.
pub(crate) fn set_bits(mut mask: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            None
        } else {
            let bit = mask.trailing_zeros() as usize;
            mask &= mask - 1;
            Some(bit)
        }
    })
}
