// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A poker hand of 2 to 7 cards.
use std::{fmt, str::FromStr};

use crate::{Card, HandError, Rank, Suit};

/// A hand of 2 to 7 unique cards sorted by rank.
///
/// The rank and suit counts are computed once at construction, a hand is a
/// read only snapshot of its cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    rank_counts: [u8; Rank::COUNT],
    suit_counts: [u8; Suit::COUNT],
}

impl Hand {
    /// The minimum number of cards in a hand.
    pub const MIN_CARDS: usize = 2;

    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 7;

    /// Creates a hand, fails for duplicate cards or if the number of cards
    /// is not between 2 and 7.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        if !(Self::MIN_CARDS..=Self::MAX_CARDS).contains(&cards.len()) {
            return Err(HandError::InvalidSize(cards.len()));
        }

        let mut seen = 0u64;
        let mut rank_counts = [0; Rank::COUNT];
        let mut suit_counts = [0; Suit::COUNT];

        for card in cards {
            let bit = 1u64 << card.id();
            if seen & bit != 0 {
                return Err(HandError::DuplicateCard(*card));
            }

            seen |= bit;
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let mut cards = cards.to_vec();
        cards.sort();

        Ok(Self {
            cards,
            rank_counts,
            suit_counts,
        })
    }

    /// The hand cards sorted by rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false as a hand has at least two cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
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

    /// The longest run of consecutive ranks and its high card.
    ///
    /// The ace only counts as the highest rank, when two runs have the same
    /// length the higher one is returned.
    pub fn longest_run(&self) -> (usize, Rank) {
        let mut best = (0, Rank::Deuce);
        let mut len = 0;

        for rank in Rank::ranks() {
            if self.rank_count(rank) == 0 {
                len = 0;
                continue;
            }

            len += 1;
            if len >= best.0 {
                best = (len, rank);
            }
        }

        best
    }

    /// The suits with at least five cards.
    pub fn flush_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::suits().filter(|&s| self.suit_count(s) >= 5)
    }

    /// The ranks with exactly two cards, highest first.
    ///
    /// Two cards out of three or four of a kind are not counted as a pair.
    pub fn pairs(&self) -> Vec<Rank> {
        self.ranks_with_count(2).collect()
    }

    /// The highest rank with exactly three cards.
    pub fn triple(&self) -> Option<Rank> {
        self.ranks_with_count(3).next()
    }

    /// The rank with four cards.
    pub fn quad(&self) -> Option<Rank> {
        self.ranks_with_count(4).next()
    }

    /// The full house three of a kind and pair ranks.
    ///
    /// A second three of a kind can be used as the pair.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let triple = self.triple()?;
        let pair = self
            .ranks_with_count(3)
            .chain(self.ranks_with_count(2))
            .find(|&r| r != triple)?;
        Some((triple, pair))
    }

    /// Returns the highest card of a straight among the hand ranks.
    ///
    /// If `wheel` is true an ace can also be used as the lowest card of a
    /// five high straight.
    pub fn straight_high_card(&self, wheel: bool) -> Option<Rank> {
        straight_high(self.rank_mask(), wheel)
    }

    /// Bit mask of the ranks in this hand.
    pub(crate) fn rank_mask(&self) -> u16 {
        rank_mask(&self.cards)
    }

    /// Bit mask of the ranks of the cards with the given suit.
    pub(crate) fn suit_rank_mask(&self, suit: Suit) -> u16 {
        self.cards
            .iter()
            .filter(|c| c.suit() == suit)
            .fold(0, |mask, c| mask | (1 << c.rank() as u16))
    }

    fn ranks_with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |&r| self.rank_count(r) == count)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses a hand from cards tokens separated by spaces or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Bit mask of the cards ranks, with the deuce at bit 0 and the ace at bit 12.
pub(crate) fn rank_mask(cards: &[Card]) -> u16 {
    cards
        .iter()
        .fold(0, |mask, c| mask | (1 << c.rank() as u16))
}

/// Returns the highest card of the highest five ranks run in a rank mask.
pub(crate) fn straight_high(mask: u16, wheel: bool) -> Option<Rank> {
    // Shift by one so that bit 0 can hold a low ace.
    let mut bits = (mask as u32) << 1;
    if wheel && mask & (1 << Rank::Ace as u16) != 0 {
        bits |= 1;
    }

    (4..=Rank::COUNT)
        .rev()
        .find(|&top| (bits >> (top - 4)) & 0x1f == 0x1f)
        .and_then(|top| Rank::from_index(top - 1))
}
