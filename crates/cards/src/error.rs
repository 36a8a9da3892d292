// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Cards and deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not a valid rank and suit.
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    /// All cards in the deck have been dealt.
    #[error("all cards in deck dealt")]
    DeckExhausted,
    /// The deck cannot be shuffled after dealing started.
    #[error("cannot shuffle cards after dealing starts")]
    DealtDeckShuffle,
}
