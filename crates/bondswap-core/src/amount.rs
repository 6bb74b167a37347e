//! # Asset Amounts — Overflow-Checked Quantities
//!
//! Defines `Amount`, the quantity type shared by the settlement asset and
//! the stake token. Amounts are plain unsigned integers in the asset's
//! smallest unit; there are no fractional amounts and no floats anywhere
//! in the workspace.
//!
//! ## Invariant
//!
//! Balance arithmetic must never wrap. `Amount` exposes only checked
//! operations; callers translate `None` into a structured error at the
//! ledger boundary.

use serde::{Deserialize, Serialize};

/// A quantity of an asset, in the asset's smallest unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a raw unit count.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// The raw unit count.
    pub const fn units(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. `None` on overflow.
    pub const fn checked_add(self, rhs: Amount) -> Option<Amount> {
        match self.0.checked_add(rhs.0) {
            Some(units) => Some(Amount(units)),
            None => None,
        }
    }

    /// Checked subtraction. `None` when `rhs` exceeds `self`.
    pub const fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        match self.0.checked_sub(rhs.0) {
            Some(units) => Some(Amount(units)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
