//! # Shared Scenario Wiring
//!
//! Builds the world every subcommand runs in: a funded seller and buyer
//! on two in-memory ledgers, a round-table oracle, and an order book
//! with all approvals granted. The delivery deadline lands ten blocks
//! past the unbonding window so commitment is legal at the start height.

use anyhow::Result;

use bondswap_core::{AccountId, Amount, BlockHeight};
use bondswap_escrow::{OrderBook, SellOrderTerms};
use bondswap_ledger::{AssetLedger, RoundTableOracle, TokenLedger, UnbondingOracle};

/// Trade parameters shared by every scenario subcommand.
#[derive(clap::Args, Debug)]
pub struct ScenarioArgs {
    /// Stake quantity the seller offers.
    #[arg(long, default_value_t = 30)]
    pub stake_value: u128,

    /// Settlement-asset price the buyer pays.
    #[arg(long, default_value_t = 20)]
    pub payment_value: u128,

    /// Settlement-asset collateral the seller locks.
    #[arg(long, default_value_t = 10)]
    pub collateral_value: u128,

    /// Blocks per staking round.
    #[arg(long, default_value_t = 2)]
    pub round_length_blocks: u64,

    /// Rounds a stake takes to become liquid.
    #[arg(long, default_value_t = 7)]
    pub unbonding_rounds: u64,

    /// Starting balance minted to each party on each ledger.
    #[arg(long, default_value_t = 100)]
    pub initial_funds: u128,
}

/// A wired-up world ready for lifecycle operations.
pub struct Scenario {
    /// The order book over in-memory collaborators.
    pub book: OrderBook<TokenLedger, TokenLedger, RoundTableOracle>,
    /// The selling party.
    pub seller: AccountId,
    /// The buying party.
    pub buyer: AccountId,
    /// Height at which the scenario starts.
    pub start: BlockHeight,
    /// The declared terms.
    pub terms: SellOrderTerms,
}

impl Scenario {
    /// Fund both parties, grant every approval, and compute terms.
    pub fn build(args: &ScenarioArgs) -> Result<Self> {
        let seller = AccountId::new();
        let buyer = AccountId::new();

        let mut settlement = TokenLedger::new();
        settlement.mint(seller, Amount::new(args.initial_funds))?;
        settlement.mint(buyer, Amount::new(args.initial_funds))?;
        let mut stake = TokenLedger::new();
        stake.mint(seller, Amount::new(args.initial_funds))?;

        let oracle = RoundTableOracle::new(args.round_length_blocks, args.unbonding_rounds);
        let start = BlockHeight::new(1_000);
        let unbonding_blocks = oracle.unbonding_period_blocks(&seller, start);

        let mut book = OrderBook::new(settlement, stake, oracle);
        let custody = book.custody_account();
        book.settlement_mut()
            .approve(seller, custody, Amount::new(args.collateral_value));
        book.settlement_mut()
            .approve(buyer, custody, Amount::new(args.payment_value));
        book.stake_mut()
            .approve(seller, custody, Amount::new(args.stake_value));

        let terms = SellOrderTerms {
            stake_value: Amount::new(args.stake_value),
            payment_value: Amount::new(args.payment_value),
            collateral_value: Amount::new(args.collateral_value),
            delivered_by: start.advance(unbonding_blocks + 10),
        };

        tracing::debug!(
            %seller,
            %buyer,
            %custody,
            unbonding_blocks,
            delivered_by = %terms.delivered_by,
            "scenario wired"
        );

        Ok(Self {
            book,
            seller,
            buyer,
            start,
            terms,
        })
    }

    /// Log both parties' balances on both ledgers, plus custody.
    pub fn log_balances(&self, stage: &str) {
        let custody = self.book.custody_account();
        tracing::info!(
            stage,
            seller_settlement = %self.book.settlement().balance_of(&self.seller),
            buyer_settlement = %self.book.settlement().balance_of(&self.buyer),
            custody_settlement = %self.book.settlement().balance_of(&custody),
            seller_stake = %self.book.stake().balance_of(&self.seller),
            buyer_stake = %self.book.stake().balance_of(&self.buyer),
            "balances"
        );
    }

    /// Pretty-printed JSON snapshot of the seller's order slot.
    pub fn order_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(
            &self.book.order(&self.seller),
        )?)
    }
}
