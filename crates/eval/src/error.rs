// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand errors.
use thiserror::Error;

use crate::{Card, CardError};

/// Invalid hand errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand must have between 2 and 7 cards.
    #[error("invalid hand with {0} cards, a hand must have 2 to 7 cards")]
    InvalidSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
    /// A card token cannot be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}
