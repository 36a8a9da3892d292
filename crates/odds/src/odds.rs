// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hole cards odds tables.
use log::trace;

use crate::{Card, CombinationIndex, OddsError, Rank, Street, Suit, UNIVERSE, index::set_bits};

/// Computes the odds tables for a player hole cards.
///
/// The calculator maps the generic slots of the street [CombinationIndex] onto
/// the cards of its universe that have not been seen by the player, each row of
/// the resulting table is a possible hand after the street is dealt.
#[derive(Debug, Clone, Copy)]
pub struct OddsCalculator {
    universe: &'static [Card; 52],
}

impl Default for OddsCalculator {
    fn default() -> Self {
        Self {
            universe: &UNIVERSE,
        }
    }
}

impl OddsCalculator {
    /// Creates a calculator for the given cards universe.
    ///
    /// The unseen cards are taken in the universe order, use the sorted
    /// [UNIVERSE] for tables that are reproducible across calculators.
    ///
    /// Fails if the universe is not a permutation of the 52 cards.
    pub fn new(universe: &'static [Card; 52]) -> Result<Self, OddsError> {
        let mask = universe
            .iter()
            .fold(0u64, |mask, card| mask | (1 << card.id()));
        if mask != (1 << UNIVERSE.len()) - 1 {
            return Err(OddsError::InvalidUniverse);
        }

        Ok(Self { universe })
    }

    /// The cards universe.
    pub fn universe(&self) -> &'static [Card; 52] {
        self.universe
    }

    /// Projects the street index on the unseen cards for the given hole cards
    /// and the board cards already revealed.
    ///
    /// The board must have no cards for the flop, three cards for the turn,
    /// and four cards for the river.
    pub fn project(
        &self,
        street: Street,
        hole: [Card; 2],
        board: &[Card],
    ) -> Result<OddsTable, OddsError> {
        if hole[0] == hole[1] {
            return Err(OddsError::InvalidHoleCards(hole[0], hole[1]));
        }

        if board.len() != street.board_cards() {
            return Err(OddsError::InvalidBoard(format!(
                "the {street} needs {} board cards, got {}",
                street.board_cards(),
                board.len()
            )));
        }

        // The known cards are set in every row.
        let mut known = 0u64;
        for card in hole.iter().chain(board) {
            let bit = 1u64 << card.id();
            if known & bit != 0 {
                return Err(OddsError::InvalidBoard(format!("duplicate card {card}")));
            }

            known |= bit;
        }

        let unseen = self
            .universe
            .iter()
            .filter(|c| known & (1 << c.id()) == 0)
            .copied()
            .collect::<Vec<_>>();

        let index = CombinationIndex::for_street(street);
        debug_assert_eq!(unseen.len(), index.slots());

        let rows = index
            .rows()
            .iter()
            .map(|&slots| {
                let cards =
                    set_bits(slots).fold(known, |mask, slot| mask | (1 << unseen[slot].id()));
                OddsRow::new(cards)
            })
            .collect::<Vec<_>>();

        trace!(
            "Projected {street} table for {} {} with {} rows",
            hole[0],
            hole[1],
            rows.len()
        );

        Ok(OddsTable {
            street,
            hole,
            board: board.to_vec(),
            rows,
        })
    }

    /// Projects the flop index for the given hole cards.
    pub fn flop(&self, hole: [Card; 2]) -> Result<OddsTable, OddsError> {
        self.project(Street::Flop, hole, &[])
    }
}

/// The odds table for a player hole cards at a street.
#[derive(Debug, Clone)]
pub struct OddsTable {
    street: Street,
    hole: [Card; 2],
    board: Vec<Card>,
    rows: Vec<OddsRow>,
}

impl OddsTable {
    /// The street dealt by this table rows.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The player hole cards.
    pub fn hole(&self) -> [Card; 2] {
        self.hole
    }

    /// The board cards revealed before the street.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The table rows.
    pub fn rows(&self) -> &[OddsRow] {
        &self.rows
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cards of the hand at `row` sorted by rank.
    pub fn cards(&self, row: usize) -> Option<Vec<Card>> {
        self.rows.get(row).map(|r| r.cards().collect())
    }

    /// Counts the rows that match a predicate.
    pub fn count<P>(&self, pred: P) -> usize
    where
        P: Fn(&OddsRow) -> bool,
    {
        self.rows.iter().filter(|&r| pred(r)).count()
    }

    /// The probability of the predicate, the matching rows over all rows.
    pub fn probability<P>(&self, pred: P) -> f64
    where
        P: Fn(&OddsRow) -> bool,
    {
        if self.rows.is_empty() {
            0.0
        } else {
            self.count(pred) as f64 / self.rows.len() as f64
        }
    }
}

/// A row of an odds table, one possible hand with its features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddsRow {
    cards: u64,
    rank_counts: [u8; Rank::COUNT],
    suit_counts: [u8; Suit::COUNT],
}

impl OddsRow {
    fn new(cards: u64) -> Self {
        let mut rank_counts = [0; Rank::COUNT];
        let mut suit_counts = [0; Suit::COUNT];

        for card in set_bits(cards).filter_map(|id| Card::from_id(id as u8)) {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        Self {
            cards,
            rank_counts,
            suit_counts,
        }
    }

    /// The row cards sorted by rank.
    pub fn cards(&self) -> impl Iterator<Item = Card> + use<> {
        set_bits(self.cards).filter_map(|id| Card::from_id(id as u8))
    }

    /// Checks if the row contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards & (1 << card.id()) != 0
    }

    /// The number of cards in this row.
    pub fn len(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Checks if the row has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// The number of cards for each rank indexed by rank.
    pub fn rank_counts(&self) -> &[u8; Rank::COUNT] {
        &self.rank_counts
    }

    /// The number of cards for each suit indexed by suit.
    pub fn suit_counts(&self) -> &[u8; Suit::COUNT] {
        &self.suit_counts
    }

    /// The number of cards with the given rank.
    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank as usize]
    }

    /// The number of cards with the given suit.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts[suit as usize]
    }

    /// Checks if any suit has at least five cards.
    pub fn flush(&self) -> bool {
        self.suit_counts.iter().any(|&c| c >= 5)
    }

    /// The highest rank in the row.
    pub fn highest_rank(&self) -> Option<Rank> {
        Rank::ranks().rev().find(|&r| self.rank_count(r) > 0)
    }

    /// The lowest rank in the row.
    pub fn lowest_rank(&self) -> Option<Rank> {
        Rank::ranks().find(|&r| self.rank_count(r) > 0)
    }

    /// The number of ranks with exactly two cards.
    pub fn pairs(&self) -> usize {
        self.ranks_with_count(2)
    }

    /// The number of ranks with exactly three cards.
    pub fn trips(&self) -> usize {
        self.ranks_with_count(3)
    }

    /// The number of ranks with four cards.
    pub fn quads(&self) -> usize {
        self.ranks_with_count(4)
    }

    /// Checks for exactly one pair and one three of a kind.
    pub fn full_house(&self) -> bool {
        self.pairs() == 1 && self.trips() == 1
    }

    fn ranks_with_count(&self, count: u8) -> usize {
        self.rank_counts.iter().filter(|&&c| c == count).count()
    }
}
