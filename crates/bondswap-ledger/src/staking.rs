//! # Unbonding Period Oracle
//!
//! Before committing to buy, the escrow must know whether the seller's
//! stake can become liquid before the delivery deadline. That knowledge
//! lives in the staking system, not the escrow, so it is consumed through
//! the [`UnbondingOracle`] capability.
//!
//! [`RoundTableOracle`] is the reference implementation: the staking
//! system counts time in rounds of a fixed block length, and a stake
//! takes a configured number of rounds to unbond. The per-seller override
//! table covers staking configurations that differ between sellers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use bondswap_core::{AccountId, BlockHeight};

/// Reports the number of blocks a seller's stake takes to become
/// withdrawable, as of the given height.
pub trait UnbondingOracle {
    /// Unbonding duration in blocks for `seller`'s staking configuration.
    ///
    /// `at` is the height the answer should be valid for; the oracle must
    /// answer at arbitrary heights.
    fn unbonding_period_blocks(&self, seller: &AccountId, at: BlockHeight) -> u64;
}

/// Round-table oracle: unbonding period = round length in blocks times
/// the number of unbonding rounds, with optional per-seller round counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTableOracle {
    round_length_blocks: u64,
    default_unbonding_rounds: u64,
    seller_rounds: HashMap<AccountId, u64>,
}

impl RoundTableOracle {
    /// Create an oracle with a global round length and default round count.
    pub fn new(round_length_blocks: u64, default_unbonding_rounds: u64) -> Self {
        Self {
            round_length_blocks,
            default_unbonding_rounds,
            seller_rounds: HashMap::new(),
        }
    }

    /// Override the unbonding round count for one seller.
    pub fn set_unbonding_rounds(&mut self, seller: AccountId, rounds: u64) {
        self.seller_rounds.insert(seller, rounds);
    }

    /// The configured round length in blocks.
    pub fn round_length_blocks(&self) -> u64 {
        self.round_length_blocks
    }
}

impl UnbondingOracle for RoundTableOracle {
    fn unbonding_period_blocks(&self, seller: &AccountId, _at: BlockHeight) -> u64 {
        let rounds = self
            .seller_rounds
            .get(seller)
            .copied()
            .unwrap_or(self.default_unbonding_rounds);
        rounds.saturating_mul(self.round_length_blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_is_rounds_times_round_length() {
        let oracle = RoundTableOracle::new(2, 7);
        let seller = AccountId::new();
        assert_eq!(
            oracle.unbonding_period_blocks(&seller, BlockHeight::new(100)),
            14
        );
    }

    #[test]
    fn test_per_seller_override() {
        let mut oracle = RoundTableOracle::new(2, 7);
        let (fast, slow) = (AccountId::new(), AccountId::new());
        oracle.set_unbonding_rounds(fast, 1);

        assert_eq!(oracle.unbonding_period_blocks(&fast, BlockHeight::GENESIS), 2);
        assert_eq!(oracle.unbonding_period_blocks(&slow, BlockHeight::GENESIS), 14);
    }

    #[test]
    fn test_answer_does_not_depend_on_height() {
        let oracle = RoundTableOracle::new(5760, 7);
        let seller = AccountId::new();
        let early = oracle.unbonding_period_blocks(&seller, BlockHeight::GENESIS);
        let late = oracle.unbonding_period_blocks(&seller, BlockHeight::new(1_000_000));
        assert_eq!(early, late);
    }

    #[test]
    fn test_huge_round_config_saturates() {
        let oracle = RoundTableOracle::new(u64::MAX, 2);
        let seller = AccountId::new();
        assert_eq!(
            oracle.unbonding_period_blocks(&seller, BlockHeight::GENESIS),
            u64::MAX
        );
    }
}
