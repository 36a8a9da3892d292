// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies a hand of 2 to 7 cards into one of the ten poker
//! categories and computes a [HandValue] that can be used to compare hands of
//! the same category using the kickers.
//!
//! Hands with more than five cards are valued by evaluating all the five cards
//! subsets and keeping the best one.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{
    Card, Hand, HandError, Rank,
    hand::{rank_mask, straight_high},
};

/// The hand category, ordered from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the lowest to the highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a hand.
///
/// Values are ordered by category first and then by the ranks that decide
/// ties between hands of the same category, two values are equal if the
/// hands tie.
#[derive(Debug, Clone)]
pub struct HandValue {
    rank: HandRank,
    values: Vec<Rank>,
    cards: Vec<Card>,
    kickers: Vec<Card>,
}

impl HandValue {
    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The rank that defines the category, i.e. the high card of a straight
    /// or the three of a kind rank of a full house.
    pub fn primary(&self) -> Rank {
        self.values[0]
    }

    /// The ranks used to break ties between hands of the same category in
    /// decreasing order of importance.
    pub fn values(&self) -> &[Rank] {
        &self.values
    }

    /// The cards that make this value, the five best cards for hands with
    /// more than five cards, sorted by rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The spare cards for high card, one pair, two pair, and three of a kind
    /// hands sorted from the highest, empty for other categories.
    ///
    /// For a high card hand the highest card is not a kicker.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.values.cmp(&other.values))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

/// Evaluator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Use the ace as the lowest card of a five high straight (A-2-3-4-5).
    pub wheel: bool,
}

/// Poker hands evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator {
    config: EvalConfig,
}

impl HandEvaluator {
    /// Creates an evaluator with the given configuration.
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The evaluator configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Classifies a hand into its best category using all the hand cards.
    pub fn classify(&self, hand: &Hand) -> HandRank {
        let wheel = self.config.wheel;

        // Straight flushes must be made of cards of the same suit.
        let straight_flush = hand
            .flush_suits()
            .filter_map(|suit| straight_high(hand.suit_rank_mask(suit), wheel))
            .max();
        if let Some(high) = straight_flush {
            return if high == Rank::Ace {
                HandRank::RoyalFlush
            } else {
                HandRank::StraightFlush
            };
        }

        let counts = hand.rank_counts();
        let with_count = |n| counts.iter().filter(|&&c| c == n).count();
        let (quads, trips, pairs) = (with_count(4), with_count(3), with_count(2));

        if quads > 0 {
            HandRank::FourOfAKind
        } else if trips >= 2 || (trips == 1 && pairs >= 1) {
            HandRank::FullHouse
        } else if hand.flush_suits().next().is_some() {
            HandRank::Flush
        } else if straight_high(hand.rank_mask(), wheel).is_some() {
            HandRank::Straight
        } else if trips == 1 {
            HandRank::ThreeOfAKind
        } else if pairs >= 2 {
            HandRank::TwoPair
        } else if pairs == 1 {
            HandRank::OnePair
        } else {
            HandRank::HighCard
        }
    }

    /// Evaluates a hand.
    ///
    /// Hands with up to five cards are evaluated as they are, for six and seven
    /// cards hands all the five cards subsets are evaluated and the best one
    /// is returned.
    pub fn eval(&self, hand: &Hand) -> HandValue {
        let cards = hand.cards();
        let n = cards.len();
        if n <= 5 {
            return self.eval_subset(cards);
        }

        // The five highest cards are a valid starting point.
        let mut best = self.eval_subset(&cards[n - 5..]);
        let mut subset = Vec::with_capacity(5);

        for mask in 0u32..(1 << n) {
            if mask.count_ones() != 5 {
                continue;
            }

            subset.clear();
            subset.extend(
                cards
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| mask & (1 << idx) != 0)
                    .map(|(_, c)| *c),
            );

            let value = self.eval_subset(&subset);
            if value > best {
                best = value;
            }
        }

        best
    }

    /// Creates a hand from the given cards and evaluates it.
    pub fn eval_cards(&self, cards: &[Card]) -> Result<HandValue, HandError> {
        Ok(self.eval(&Hand::new(cards)?))
    }

    /// Compares two hands.
    pub fn compare(&self, h1: &Hand, h2: &Hand) -> Ordering {
        self.eval(h1).cmp(&self.eval(h2))
    }

    /// Evaluates up to five unique cards sorted by rank.
    fn eval_subset(&self, cards: &[Card]) -> HandValue {
        let mut counts = [0u8; Rank::COUNT];
        for c in cards {
            counts[c.rank() as usize] += 1;
        }

        // Ranks grouped by count, highest count first and highest rank first
        // for the same count.
        let mut groups = Rank::ranks()
            .rev()
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| b.0.cmp(&a.0));

        let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = if groups.len() == 5 {
            straight_high(rank_mask(cards), self.config.wheel)
        } else {
            None
        };

        let count_at = |idx: usize| groups.get(idx).map(|g| g.0).unwrap_or(0);
        let rank = match (straight, is_flush, count_at(0), count_at(1)) {
            (Some(Rank::Ace), true, _, _) => HandRank::RoyalFlush,
            (Some(_), true, _, _) => HandRank::StraightFlush,
            (_, _, 4, _) => HandRank::FourOfAKind,
            (_, _, 3, 2) => HandRank::FullHouse,
            (_, true, _, _) => HandRank::Flush,
            (Some(_), _, _, _) => HandRank::Straight,
            (_, _, 3, _) => HandRank::ThreeOfAKind,
            (_, _, 2, 2) => HandRank::TwoPair,
            (_, _, 2, _) => HandRank::OnePair,
            _ => HandRank::HighCard,
        };

        // A straight is only decided by its high card, so that an ace used as
        // the lowest card doesn't count as the highest value.
        let values = match (rank, straight) {
            (
                HandRank::Straight | HandRank::StraightFlush | HandRank::RoyalFlush,
                Some(high),
            ) => vec![high],
            _ => groups.iter().map(|g| g.1).collect(),
        };

        let descending = cards.iter().rev().copied();
        let kickers = match rank {
            HandRank::HighCard => descending.skip(1).collect(),
            HandRank::OnePair | HandRank::TwoPair | HandRank::ThreeOfAKind => descending
                .filter(|c| counts[c.rank() as usize] == 1)
                .collect(),
            _ => Vec::new(),
        };

        HandValue {
            rank,
            values,
            cards: cards.to_vec(),
            kickers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn eval(s: &str) -> HandValue {
        HandEvaluator::default().eval(&hand(s))
    }

    fn classify(s: &str) -> HandRank {
        HandEvaluator::default().classify(&hand(s))
    }

    fn ranks(cards: &[Card]) -> Vec<u8> {
        cards.iter().map(|c| c.rank().value()).collect()
    }

    #[test]
    fn straight_flush() {
        let v = eval("2C 3C 4C 5C 6C");
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(v.primary(), Rank::Six);
        assert!(v.kickers().is_empty());
        assert_eq!(classify("2C 3C 4C 5C 6C"), HandRank::StraightFlush);
    }

    #[test]
    fn royal_flush() {
        let v = eval("AC KC QC JC 10C");
        assert_eq!(v.rank(), HandRank::RoyalFlush);
        assert_eq!(v.primary(), Rank::Ace);
        assert_eq!(classify("AC KC QC JC 10C"), HandRank::RoyalFlush);
    }

    #[test]
    fn full_house_beats_three_of_a_kind() {
        let fh = eval("2C 2D 2H 5S 5C");
        assert_eq!(fh.rank(), HandRank::FullHouse);
        assert_eq!(fh.values(), &[Rank::Deuce, Rank::Five]);

        let trips = eval("2C 2D 2H 3S 4C");
        assert_eq!(trips.rank(), HandRank::ThreeOfAKind);
        assert_eq!(ranks(trips.kickers()), vec![4, 3]);

        assert!(fh > trips);
    }

    #[test]
    fn high_card_kickers() {
        let v = eval("2C 3D 5H 7S 9C");
        assert_eq!(v.rank(), HandRank::HighCard);
        assert_eq!(v.primary(), Rank::Nine);
        assert_eq!(ranks(v.kickers()), vec![7, 5, 3, 2]);
    }

    #[test]
    fn pair_kickers() {
        let v = eval("KC 9D KH 2S 5C");
        assert_eq!(v.rank(), HandRank::OnePair);
        assert_eq!(v.values(), &[Rank::King, Rank::Nine, Rank::Five, Rank::Deuce]);
        assert_eq!(ranks(v.kickers()), vec![9, 5, 2]);

        let v = eval("KC 9D KH 9S 5C");
        assert_eq!(v.rank(), HandRank::TwoPair);
        assert_eq!(v.values(), &[Rank::King, Rank::Nine, Rank::Five]);
        assert_eq!(ranks(v.kickers()), vec![5]);
    }

    #[test]
    fn categories() {
        let cases = [
            ("8C 8D 8H 8S 2C", HandRank::FourOfAKind),
            ("2H 7H 9H JH KH", HandRank::Flush),
            ("5C 6D 7H 8S 9C", HandRank::Straight),
            ("10C JD QH KS AC", HandRank::Straight),
            ("4C 4D 4H 9S KC", HandRank::ThreeOfAKind),
            ("4C 4D 9H 9S KC", HandRank::TwoPair),
            ("4C 4D 8H 9S KC", HandRank::OnePair),
            ("4C 6D 8H 9S KC", HandRank::HighCard),
        ];

        for (cards, rank) in cases {
            assert_eq!(eval(cards).rank(), rank, "{cards}");
            assert_eq!(classify(cards), rank, "{cards}");
        }
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(eval("AC 2D 3H 4S 5C").rank(), HandRank::HighCard);
        assert_eq!(eval("AC 2C 3C 4C 5C").rank(), HandRank::Flush);

        let evaluator = HandEvaluator::new(EvalConfig { wheel: true });
        let v = evaluator.eval(&hand("AC 2D 3H 4S 5C"));
        assert_eq!(v.rank(), HandRank::Straight);
        assert_eq!(v.primary(), Rank::Five);

        let v = evaluator.eval(&hand("AC 2C 3C 4C 5C"));
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(v.primary(), Rank::Five);
        assert_eq!(
            evaluator.classify(&hand("AC 2C 3C 4C 5C 9D")),
            HandRank::StraightFlush
        );

        // The wheel is the lowest straight.
        let six_high = evaluator.eval(&hand("2D 3H 4S 5C 6C"));
        assert!(six_high > evaluator.eval(&hand("AC 2D 3H 4S 5C")));
    }

    #[test]
    fn small_hands() {
        let v = eval("AS AD");
        assert_eq!(v.rank(), HandRank::OnePair);
        assert!(v.kickers().is_empty());

        let v = eval("AS KD 2C");
        assert_eq!(v.rank(), HandRank::HighCard);
        assert_eq!(ranks(v.kickers()), vec![13, 2]);

        assert_eq!(eval("7S 7D 7C 7H").rank(), HandRank::FourOfAKind);
        assert_eq!(classify("7S 7D 7C"), HandRank::ThreeOfAKind);
    }

    #[test]
    fn best_five_of_seven() {
        let v = eval("AS KS QS JS 10S 2D 3C");
        assert_eq!(v.rank(), HandRank::RoyalFlush);
        assert_eq!(ranks(v.cards()), vec![10, 11, 12, 13, 14]);

        // Three pairs play the two highest pairs and the best kicker.
        let v = eval("2C 2D 9H 9S KC KD 5H");
        assert_eq!(v.rank(), HandRank::TwoPair);
        assert_eq!(v.values(), &[Rank::King, Rank::Nine, Rank::Five]);

        // Two three of a kind make a full house.
        let v = eval("5C 5D 5H 9S 9C 9D 2H");
        assert_eq!(v.rank(), HandRank::FullHouse);
        assert_eq!(v.values(), &[Rank::Nine, Rank::Five]);

        // Straight flush inside a bigger flush.
        let v = eval("3H 4H 5H 6H 7H 8D AH");
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(v.primary(), Rank::Seven);

        // Six cards straight plays the highest five.
        let v = eval("4C 5D 6H 7S 8C 9D");
        assert_eq!(v.rank(), HandRank::Straight);
        assert_eq!(v.primary(), Rank::Nine);
    }

    #[test]
    fn eval_matches_classify() {
        let hands = [
            "AS KS QS JS 10S 2D 3C",
            "2C 2D 9H 9S KC KD 5H",
            "5C 5D 5H 9S 9C 9D 2H",
            "3H 4H 5H 6H 7H 8D AH",
            "8C 8D 8H 8S 2C 2D 2H",
            "2H 7H 9H JH KH 3H 3D",
            "4C 5D 6H 7S 8C 9D KD",
            "4C 4D 4H 9S KC 2D",
            "4C 4D 8H 9S KC 2D",
            "4C 6D 8H 9S KC 2D 3H",
        ];

        let evaluator = HandEvaluator::default();
        for cards in hands {
            let h = hand(cards);
            assert_eq!(evaluator.eval(&h).rank(), evaluator.classify(&h), "{cards}");
        }
    }

    #[test]
    fn kickers_break_ties() {
        let evaluator = HandEvaluator::default();

        let h1 = hand("KC KD AH 7S 3C");
        let h2 = hand("KH KS QC 7D 3D");
        assert_eq!(evaluator.compare(&h1, &h2), Ordering::Greater);

        // Same ranks with different suits tie.
        let h3 = hand("KH KS AC 7D 3D");
        assert_eq!(evaluator.compare(&h1, &h3), Ordering::Equal);
        assert_eq!(evaluator.eval(&h1), evaluator.eval(&h3));

        // Four of a kind kicker.
        let q1 = eval("9C 9D 9H 9S AC");
        let q2 = eval("9C 9D 9H 9S KC");
        assert!(q1 > q2);

        // Flush compares all cards.
        let f1 = eval("2H 7H 9H JH KH");
        let f2 = eval("3H 7H 9H JH KH");
        assert!(f2 > f1);
    }

    #[test]
    fn eval_cards_errors() {
        let evaluator = HandEvaluator::default();
        let ace = "AS".parse::<Card>().unwrap();
        assert_eq!(
            evaluator.eval_cards(&[ace]).unwrap_err(),
            HandError::InvalidSize(1)
        );
        assert_eq!(
            evaluator.eval_cards(&[ace, ace]).unwrap_err(),
            HandError::DuplicateCard(ace)
        );
    }

    #[test]
    fn hand_rank_order() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), HandRank::COUNT);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HandRank::FullHouse.to_string(), "Full House");
    }

    // This takes a while to run in debug mode as it goes through 2.6M hands.
    #[test]
    #[ignore]
    fn all_five_cards_hands() {
        let evaluator = HandEvaluator::default();
        let cards = crate::UNIVERSE;
        let mut counts = [0usize; HandRank::COUNT];

        for c1 in 0..52 {
            for c2 in (c1 + 1)..52 {
                for c3 in (c2 + 1)..52 {
                    for c4 in (c3 + 1)..52 {
                        for c5 in (c4 + 1)..52 {
                            let h = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let h = Hand::new(&h).unwrap();
                            let rank = evaluator.eval(&h).rank();
                            assert_eq!(rank, evaluator.classify(&h));
                            counts[rank as usize] += 1;
                        }
                    }
                }
            }
        }

        // Without the wheel the A-5 straights are high cards or flushes.
        assert_eq!(
            counts,
            [1_303_560, 1_098_240, 123_552, 54_912, 9_180, 5_112, 3_744, 624, 32, 4]
        );
    }
}
