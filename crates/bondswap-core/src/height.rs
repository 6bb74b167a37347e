//! # Block Heights — The Time Basis
//!
//! Defines `BlockHeight`, the monotonically increasing ledger progress
//! counter. Every deadline in bondswap (delivery deadlines, unbonding
//! windows, lock periods) is a comparison between two heights; nothing
//! reads a wall clock.
//!
//! The current height is ambient state owned by the surrounding chain or
//! test harness, so operations that depend on it take it as an explicit
//! argument and evaluate their guards fresh on every call.

use serde::{Deserialize, Serialize};

/// A position in the chain's history, counted in blocks from genesis.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Height zero.
    pub const GENESIS: BlockHeight = BlockHeight(0);

    /// Create a height from a raw block number.
    pub const fn new(block: u64) -> Self {
        Self(block)
    }

    /// The raw block number.
    pub const fn block(&self) -> u64 {
        self.0
    }

    /// The height `blocks` after this one, saturating at the maximum.
    pub const fn advance(self, blocks: u64) -> BlockHeight {
        BlockHeight(self.0.saturating_add(blocks))
    }

    /// The height `blocks` before this one, saturating at genesis.
    ///
    /// Saturation is the intended window semantics: if an unbonding
    /// period reaches back past genesis, the whole of history is inside
    /// the window.
    pub const fn rewind(self, blocks: u64) -> BlockHeight {
        BlockHeight(self.0.saturating_sub(blocks))
    }
}

impl From<u64> for BlockHeight {
    fn from(block: u64) -> Self {
        Self(block)
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
