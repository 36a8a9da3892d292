// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinatorics and closed form draw probabilities.
use crate::OddsError;

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 64.
pub fn nck(n: u32, k: u32) -> u64 {
    assert!(n <= 64, "n={n} must be 0 <= n <= 64");

    if k > n {
        return 0;
    }

    // Each partial product is a binomial coefficient so the division is exact.
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let r = (0..k).fold(1u128, |r, i| r * (n - i) / (i + 1));
    r as u64
}

/// Returns the number of r-permutations of n items, `None` on overflow.
pub fn npr(n: u32, r: u32) -> Option<u128> {
    if r > n {
        return Some(0);
    }

    ((n - r + 1)..=n).try_fold(1u128, |p, i| p.checked_mul(i as u128))
}

/// Returns n factorial, `None` on overflow.
pub fn factorial(n: u32) -> Option<u128> {
    npr(n, n)
}

/// Calls the `f` closure for each k-subset of `0..n` in lexicographic order.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    let mut c = (0..k).collect::<Vec<_>>();

    loop {
        f(&c);

        // Find the rightmost position that can move forward.
        let Some(i) = (0..k).rev().find(|&i| c[i] < n - k + i) else {
            break;
        };

        c[i] += 1;
        for j in (i + 1)..k {
            c[j] = c[j - 1] + 1;
        }
    }
}

/// A draw for one of `outs` target cards from the unseen cards.
///
/// The default is a draw from a full deck with two cards in hand and no cards
/// on the table, i.e. a pre-flop draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutsDraw {
    /// The number of target cards left in the deck.
    pub outs: u32,
    /// The number of cards still to be dealt.
    pub to_deal: u32,
    /// The number of seen cards in the player hand.
    pub in_hand: u32,
    /// The number of seen cards on the table.
    pub on_table: u32,
    /// The total number of cards in the deck.
    pub in_deck: u32,
}

impl Default for OutsDraw {
    fn default() -> Self {
        Self {
            outs: 0,
            to_deal: 0,
            in_hand: 2,
            on_table: 0,
            in_deck: 52,
        }
    }
}

impl OutsDraw {
    /// Creates a pre-flop draw with the given outs and cards to deal.
    pub fn new(outs: u32, to_deal: u32) -> Self {
        Self {
            outs,
            to_deal,
            ..Default::default()
        }
    }

    /// The number of cards not seen by the player.
    pub fn unseen(&self) -> Option<u32> {
        self.in_hand
            .checked_add(self.on_table)
            .and_then(|seen| self.in_deck.checked_sub(seen))
    }

    /// The probability of drawing at least one of the outs.
    ///
    /// This is one minus the probability of missing all outs on each of the
    /// `to_deal` cards, with the unseen cards decreasing after each card:
    ///
    /// ```text
    /// 1 - prod_{i=0}^{to_deal-1} (unseen - outs - i) / (unseen - i)
    /// ```
    ///
    /// Fails if there are fewer unseen cards than outs or cards to deal.
    pub fn probability(&self) -> Result<f64, OddsError> {
        let unseen = self
            .unseen()
            .filter(|&unseen| unseen >= self.to_deal && unseen >= self.outs)
            .ok_or(OddsError::InvalidDraw(*self))?;

        // Once all the non outs cards are gone the miss probability is zero.
        let miss = (0..self.to_deal).fold(1.0, |p, i| {
            let left = unseen - i;
            p * left.saturating_sub(self.outs) as f64 / left as f64
        });

        Ok(1.0 - miss)
    }
}

/// The probability of drawing at least one of `n` outs with `to_deal` cards
/// still to be dealt.
///
/// For example to get the probability of hitting three of a kind pre-flop
/// holding a pair use `n = 2` as there are two cards left that make three of a
/// kind and `to_deal = 5` for the five board cards, with `in_hand = 2`,
/// `on_table = 0`, `in_deck = 52`.
pub fn hit_probability(
    n: u32,
    to_deal: u32,
    in_hand: u32,
    on_table: u32,
    in_deck: u32,
) -> Result<f64, OddsError> {
    OutsDraw {
        outs: n,
        to_deal,
        in_hand,
        on_table,
        in_deck,
    }
    .probability()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k as u32), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k as u32), v));

        assert_eq!(nck(50, 3), 19600);
        assert_eq!(nck(47, 1), 47);
        assert_eq!(nck(46, 1), 46);
        assert_eq!(nck(52, 26), 495_918_532_948_104);
        assert_eq!(nck(0, 0), 1);
    }

    #[test]
    fn test_npr_factorial() {
        assert_eq!(npr(52, 2), Some(2652));
        assert_eq!(npr(52, 5), Some(311_875_200));
        assert_eq!(npr(5, 0), Some(1));
        assert_eq!(npr(3, 5), Some(0));

        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert!(factorial(34).is_some());
        assert_eq!(factorial(35), None);
    }

    #[test]
    fn test_ksubsets() {
        let mut subsets = Vec::new();
        for_each_ksubset(4, 2, |s| subsets.push(s.to_vec()));
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );

        let mut count = 0;
        for_each_ksubset(50, 3, |s| {
            assert_eq!(s.len(), 3);
            count += 1;
        });
        assert_eq!(count as u64, nck(50, 3));

        count = 0;
        for_each_ksubset(3, 0, |s| {
            assert!(s.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);

        count = 0;
        for_each_ksubset(2, 3, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn pair_to_three_of_a_kind() {
        let p = hit_probability(2, 5, 2, 0, 52).unwrap();
        let miss = (48.0 / 50.0) * (47.0 / 49.0) * (46.0 / 48.0) * (45.0 / 47.0) * (44.0 / 46.0);
        assert!((p - (1.0 - miss)).abs() < 1e-12);
        assert!((p - 470.0 / 2450.0).abs() < 1e-12);

        assert_eq!(OutsDraw::new(2, 5).probability().unwrap(), p);
    }

    #[test]
    fn flush_draw_on_flop() {
        // Nine outs with two cards to come.
        let draw = OutsDraw {
            outs: 9,
            to_deal: 2,
            on_table: 3,
            ..Default::default()
        };
        assert_eq!(draw.unseen(), Some(47));

        let p = draw.probability().unwrap();
        let expected = 1.0 - (38.0 / 47.0) * (37.0 / 46.0);
        assert!((p - expected).abs() < 1e-12);
    }

    #[test]
    fn edge_draws() {
        assert_eq!(OutsDraw::new(4, 0).probability().unwrap(), 0.0);
        assert_eq!(OutsDraw::new(0, 5).probability().unwrap(), 0.0);

        // All the unseen cards are outs.
        assert_eq!(hit_probability(50, 1, 2, 0, 52).unwrap(), 1.0);

        // More outs than non outs cards.
        assert_eq!(hit_probability(48, 5, 2, 0, 52).unwrap(), 1.0);
    }

    #[test]
    fn invalid_draws() {
        assert!(matches!(
            hit_probability(51, 1, 2, 0, 52),
            Err(OddsError::InvalidDraw(_))
        ));
        assert!(matches!(
            hit_probability(1, 3, 2, 48, 52),
            Err(OddsError::InvalidDraw(_))
        ));
        assert!(matches!(
            hit_probability(1, 1, 2, 51, 52),
            Err(OddsError::InvalidDraw(_))
        ));

        // Seen cards overflow.
        assert!(matches!(
            hit_probability(1, 1, u32::MAX, 1, 52),
            Err(OddsError::InvalidDraw(_))
        ));
        assert_eq!(
            OutsDraw {
                in_hand: u32::MAX,
                on_table: u32::MAX,
                ..Default::default()
            }
            .unseen(),
            None
        );
    }
}
