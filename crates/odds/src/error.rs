// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds errors.
use thiserror::Error;

use crate::{Card, OutsDraw};

/// Odds calculation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OddsError {
    /// The two hole cards are the same card.
    #[error("invalid hole cards {0} {1}")]
    InvalidHoleCards(Card, Card),
    /// The board doesn't match the street or has repeated cards.
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    /// The draw has more cards to deal or outs than unseen cards.
    #[error("invalid draw {0:?}")]
    InvalidDraw(OutsDraw),
    /// The cards universe has repeated or missing cards.
    #[error("the cards universe is not a permutation of the 52 cards")]
    InvalidUniverse,
}
