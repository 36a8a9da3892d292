// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is stored as its position in the canonical 52 cards universe, sorted
/// by rank first and suit second:
///
/// ```text
///   +--------+
///   |rrrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// The id is unique for each (rank, suit) pair, and the derived ordering
/// compares the rank first so that cards with different ranks are ordered by
/// rank, the suit only breaks ties between cards with the same rank.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// Creates a card from its unique id, returns `None` if `id >= 52`.
    pub const fn from_id(id: u8) -> Option<Card> {
        if id < 52 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Parses a card from separate rank and suit tokens given in either order.
    ///
    /// ```
    /// # use pokerbot_cards::*;
    /// let c1 = Card::from_parts("A", "s").unwrap();
    /// let c2 = Card::from_parts("S", "1").unwrap();
    /// assert_eq!(c1, c2);
    /// ```
    pub fn from_parts(first: &str, second: &str) -> Result<Card, CardError> {
        let (rank, suit) = if let Some(suit) = Suit::parse(first) {
            (second, suit)
        } else if let Some(suit) = Suit::parse(second) {
            (first, suit)
        } else {
            return Err(CardError::InvalidCard(format!("{first} {second}")));
        };

        let rank =
            Rank::parse(rank).ok_or_else(|| CardError::InvalidCard(format!("{first} {second}")))?;
        Ok(Card::new(rank, suit))
    }

    /// This card unique id.
    pub const fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub const fn suit(&self) -> Suit {
        SUITS[(self.0 & 0x3) as usize]
    }

    /// Returns the card rank.
    pub const fn rank(&self) -> Rank {
        RANKS[(self.0 >> 2) as usize]
    }

    /// The card long name, i.e. "Ace of Spades".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank().name(), self.suit().name())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card token like `AS`, `10d`, `h12` or `s1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(s.to_string());

        // The suit letter can be either at the end or at the start of the token.
        let (rank, suit) = if let Some(suit) = s.chars().last().and_then(Suit::from_char) {
            (&s[..s.len() - 1], suit)
        } else if let Some(suit) = s.chars().next().and_then(Suit::from_char) {
            (&s[1..], suit)
        } else {
            return Err(invalid());
        };

        let rank = Rank::parse(rank).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// All the 52 cards sorted by rank and suit, a card id is its index.
pub static UNIVERSE: [Card; 52] = make_universe();

const fn make_universe() -> [Card; 52] {
    let mut cards = [Card(0); 52];
    let mut id = 0;

    while id < 52 {
        cards[id] = Card(id as u8);
        id += 1;
    }

    cards
}

const RANKS: [Rank; 13] = {
    use Rank::*;
    [
        Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
    ]
};

const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// Returns the rank for an index, deuce=0,...,ace=12.
    pub const fn from_index(index: usize) -> Option<Rank> {
        if index < RANKS.len() {
            Some(RANKS[index])
        } else {
            None
        }
    }

    /// Returns the rank for a value, deuce=2,...,ace=14.
    pub const fn from_value(value: u8) -> Option<Rank> {
        if value >= 2 {
            Self::from_index(value as usize - 2)
        } else {
            None
        }
    }

    /// The rank value used for ranking, deuce=2,...,ten=10,...,ace=14.
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// The rank long name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Parses a rank token.
    ///
    /// Accepts the letters `J`, `Q`, `K`, `A` in any case, the numbers `2` to `10`,
    /// and the numerals `1`, `11`, `12`, `13` for ace, jack, queen, and king.
    /// Numbers with a sign or a leading zero are rejected.
    pub fn parse(s: &str) -> Option<Rank> {
        let digits = !s.is_empty() && !s.starts_with('0') && s.bytes().all(|b| b.is_ascii_digit());
        if let Some(n) = digits.then(|| s.parse::<u8>().ok()).flatten() {
            return match n {
                1 => Some(Rank::Ace),
                2..=13 => Self::from_value(n),
                _ => None,
            };
        }

        match s.to_ascii_uppercase().as_str() {
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            rank => rank.name(),
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        SUITS.into_iter()
    }

    /// Parses a suit letter, `C`, `D`, `H`, or `S` in any case.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Parses a single letter suit token.
    pub fn parse(s: &str) -> Option<Suit> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// The suit long name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}
