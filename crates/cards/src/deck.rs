// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck for dealing.
use rand::prelude::*;

use crate::{Card, CardError, UNIVERSE};

/// A cards Deck.
///
/// The deck keeps all its cards in the shuffled order and a dealing position,
/// cards before the position are the dealt cards and cards after are the
/// cards still to be dealt.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck shuffled with the thread random generator.
    pub fn new() -> Self {
        Self::new_and_shuffled(&mut rand::rng())
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = UNIVERSE.to_vec();
        cards.shuffle(rng);
        Self { cards, dealt: 0 }
    }

    /// Shuffles the deck, fails if any card has been dealt.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), CardError> {
        if self.dealt > 0 {
            return Err(CardError::DealtDeckShuffle);
        }

        self.cards.shuffle(rng);
        Ok(())
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card, CardError> {
        let card = self
            .cards
            .get(self.dealt)
            .copied()
            .ok_or(CardError::DeckExhausted)?;
        self.dealt += 1;
        Ok(card)
    }

    /// All the deck cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards dealt so far in dealing order.
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.dealt]
    }

    /// The cards still to be dealt.
    pub fn not_dealt(&self) -> &[Card] {
        &self.cards[self.dealt..]
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of cards left in the deck.
    pub fn count(&self) -> usize {
        self.cards.len() - self.dealt
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    /// Iterates the cards still to be dealt.
    fn into_iter(mut self) -> Self::IntoIter {
        self.cards.split_off(self.dealt).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn deck_cards() {
        let deck = Deck::new();
        assert_eq!(deck.count(), Deck::SIZE);
        assert!(deck.dealt().is_empty());

        let cards = deck.cards().iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(UNIVERSE.iter().all(|c| cards.contains(c)));
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::new();
        let mut dealt = Vec::new();

        while !deck.is_empty() {
            let expected = deck.not_dealt()[0];
            let card = deck.deal().unwrap();
            assert_eq!(card, expected);
            dealt.push(card);

            // Dealt and not dealt cards partition the deck.
            assert_eq!(deck.dealt(), &dealt[..]);
            assert_eq!(deck.dealt().len() + deck.not_dealt().len(), Deck::SIZE);
            assert!(deck.not_dealt().iter().all(|c| !dealt.contains(c)));
        }

        assert_eq!(dealt.len(), Deck::SIZE);
        assert_eq!(deck.deal(), Err(CardError::DeckExhausted));
    }

    #[test]
    fn deck_shuffle() {
        let mut rng = StdRng::seed_from_u64(101);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        assert!(deck.shuffle(&mut rng).is_ok());

        deck.deal().unwrap();
        assert_eq!(deck.shuffle(&mut rng), Err(CardError::DealtDeckShuffle));
        assert_eq!(deck.count(), Deck::SIZE - 1);
    }

    #[test]
    fn deck_seeded() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(d1.cards(), d2.cards());
    }

    #[test]
    fn deck_into_iter() {
        let mut deck = Deck::new();
        let first = deck.deal().unwrap();
        let rest = deck.into_iter().collect::<Vec<_>>();
        assert_eq!(rest.len(), Deck::SIZE - 1);
        assert!(!rest.contains(&first));
    }
}
