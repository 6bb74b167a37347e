//! # Order Book State Machine
//!
//! The escrow ledger: a seller-keyed map of at most one [`SellOrder`]
//! each, plus the four lifecycle transitions and the custody account that
//! holds locked settlement funds while an order is alive.
//!
//! ## Lifecycle (per seller slot)
//!
//! ```text
//! Absent ──create_sell_order()──▶ Open ──commit_to_buy()──▶ Committed
//!    ▲                             │                            │
//!    │◀────cancel_sell_order()─────┘                            │
//!    │                                                          │
//!    │◀────────────cancel_sell_order()──────────────────────────┤
//!    │◀────────────claim_collateral_and_payment()───────────────┤
//!    │◀────────────fulfill_sell_order()─────────────────────────┘
//! ```
//!
//! Absent is both the initial and the terminal state. No operation leaves
//! an order in any state other than Open, Committed, or gone.
//!
//! ## Fund-Safety Invariants
//!
//! - Custody holds exactly `collateral_value` for every Open order and
//!   `collateral_value + payment_value` for every Committed order.
//! - Each locked amount is released exactly once, by exactly one of the
//!   three destroying transitions.
//! - A failed operation performs no transfer and no order mutation.
//!
//! ## Concurrency
//!
//! Operations take `&mut self` and are fully serialized by construction.
//! The only externally visible race, a committed order past its deadline
//! where both `fulfill_sell_order` and `claim_collateral_and_payment` are
//! eligible, resolves to whichever call is sequenced first; the loser
//! finds the slot empty and fails cleanly instead of double-paying.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use bondswap_core::{AccountId, BlockHeight};
use bondswap_ledger::{AssetLedger, LedgerError, UnbondingOracle};

use crate::error::EscrowError;
use crate::order::{SellOrder, SellOrderTerms};

/// The escrow order book over injected asset ledgers and staking oracle.
///
/// `S` is the settlement-asset ledger, `K` the stake-token ledger, `O`
/// the unbonding oracle. The book is one account holder among others on
/// the ledgers; its custody account is generated at construction and
/// never coincides with a caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBook<S, K, O> {
    custody: AccountId,
    settlement: S,
    stake: K,
    oracle: O,
    orders: HashMap<AccountId, SellOrder>,
}

impl<S, K, O> OrderBook<S, K, O>
where
    S: AssetLedger,
    K: AssetLedger,
    O: UnbondingOracle,
{
    /// Create an empty book over the given collaborators.
    pub fn new(settlement: S, stake: K, oracle: O) -> Self {
        Self {
            custody: AccountId::new(),
            settlement,
            stake,
            oracle,
            orders: HashMap::new(),
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────

    /// The identity under which the book holds locked settlement funds.
    /// Sellers approve collateral to it, buyers approve payment to it,
    /// and sellers approve the stake leg of fulfillment to it.
    pub fn custody_account(&self) -> AccountId {
        self.custody
    }

    /// The seller's active order, if any.
    pub fn order(&self, seller: &AccountId) -> Option<&SellOrder> {
        self.orders.get(seller)
    }

    /// Whether the seller currently has an active order.
    pub fn has_order(&self, seller: &AccountId) -> bool {
        self.orders.contains_key(seller)
    }

    /// Number of active orders across all sellers.
    pub fn open_order_count(&self) -> usize {
        self.orders.len()
    }

    /// The settlement-asset ledger.
    pub fn settlement(&self) -> &S {
        &self.settlement
    }

    /// The settlement-asset ledger, mutably. The ledger is shared
    /// infrastructure; the book is only one account holder on it.
    pub fn settlement_mut(&mut self) -> &mut S {
        &mut self.settlement
    }

    /// The stake-token ledger.
    pub fn stake(&self) -> &K {
        &self.stake
    }

    /// The stake-token ledger, mutably.
    pub fn stake_mut(&mut self) -> &mut K {
        &mut self.stake
    }

    // ─── Transitions ─────────────────────────────────────────────────

    /// Create a sell order for `seller` (Absent → Open).
    ///
    /// Locks `terms.collateral_value` of the settlement asset in custody;
    /// the seller must have approved at least that much to the custody
    /// account beforehand. The order is only written once the collateral
    /// transfer has succeeded.
    pub fn create_sell_order(
        &mut self,
        seller: AccountId,
        terms: SellOrderTerms,
        at: BlockHeight,
    ) -> Result<(), EscrowError> {
        if self.orders.contains_key(&seller) {
            return Err(EscrowError::OrderAlreadyInitialized { seller });
        }
        if terms.stake_value.is_zero() {
            return Err(EscrowError::ZeroSellValue { seller });
        }
        if terms.delivered_by <= at {
            return Err(EscrowError::DeliveryDeadlineInPast {
                delivered_by: terms.delivered_by,
                current: at,
            });
        }

        let custody = self.custody;
        self.settlement
            .transfer_from(&custody, &seller, &custody, terms.collateral_value)?;
        self.orders.insert(seller, SellOrder::open(terms));
        Ok(())
    }

    /// Cancel `seller`'s order (Open or Committed → Absent).
    ///
    /// Unconditional once an order exists: no commitment or deadline
    /// check. Refunds the seller's collateral and, if a buyer had already
    /// committed, refunds that buyer's payment in the same operation, so
    /// cancellation never strands funds in custody.
    pub fn cancel_sell_order(&mut self, seller: AccountId) -> Result<(), EscrowError> {
        let custody = self.custody;
        let order = self
            .orders
            .get(&seller)
            .ok_or(EscrowError::OrderNotInitialized { seller })?;
        let collateral = order.collateral_value;
        let buyer_refund = order.buyer.map(|buyer| (buyer, order.payment_value));

        self.settlement.transfer(&custody, &seller, collateral)?;
        if let Some((buyer, payment)) = buyer_refund {
            self.settlement.transfer(&custody, &buyer, payment)?;
        }
        self.orders.remove(&seller);
        Ok(())
    }

    /// Commit `buyer` to `seller`'s open order (Open → Committed).
    ///
    /// Rejected inside the unbonding window: if the seller's stake,
    /// unbonded starting now, could not be liquid strictly before the
    /// delivery deadline, the trade is doomed and must not take the
    /// buyer's money. Locks `payment_value` in custody (requires the
    /// buyer's prior allowance) and records the buyer.
    pub fn commit_to_buy(
        &mut self,
        buyer: AccountId,
        seller: AccountId,
        at: BlockHeight,
    ) -> Result<(), EscrowError> {
        let custody = self.custody;
        let period = self.oracle.unbonding_period_blocks(&seller, at);
        let order = self
            .orders
            .get_mut(&seller)
            .ok_or(EscrowError::OrderNotInitialized { seller })?;

        if order.buyer.is_some() {
            return Err(EscrowError::AlreadyCommitted { seller });
        }
        // The window is the trailing `period` blocks before the deadline.
        if at >= order.delivered_by.rewind(period) {
            return Err(EscrowError::WithinUnbondingWindow {
                current: at,
                delivered_by: order.delivered_by,
                unbonding_period_blocks: period,
            });
        }

        self.settlement
            .transfer_from(&custody, &buyer, &custody, order.payment_value)?;
        order.buyer = Some(buyer);
        Ok(())
    }

    /// Pay out a missed delivery to the buyer (Committed → Absent).
    ///
    /// Only the committed buyer may claim, and only once the delivery
    /// deadline has been reached. The buyer recovers their payment plus
    /// the seller's forfeited collateral.
    pub fn claim_collateral_and_payment(
        &mut self,
        caller: AccountId,
        seller: AccountId,
        at: BlockHeight,
    ) -> Result<(), EscrowError> {
        let custody = self.custody;
        let order = self
            .orders
            .get(&seller)
            .ok_or(EscrowError::OrderNotInitialized { seller })?;
        let buyer = order
            .buyer
            .ok_or(EscrowError::OrderNotCommitted { seller })?;
        if caller != buyer {
            return Err(EscrowError::NotBuyer { seller, caller });
        }
        if at < order.delivered_by {
            return Err(EscrowError::StillWithinLockPeriod {
                delivered_by: order.delivered_by,
                current: at,
            });
        }

        let payout = order
            .settlement_payout()
            .ok_or(EscrowError::Transfer(LedgerError::BalanceOverflow {
                account: custody,
            }))?;
        self.settlement.transfer(&custody, &buyer, payout)?;
        self.orders.remove(&seller);
        Ok(())
    }

    /// Settle a completed delivery (Committed → Absent), seller-called.
    ///
    /// Moves the stake to the buyer (requires the seller's allowance on
    /// the stake ledger) and releases payment plus collateral to the
    /// seller. There is no deadline check: a late fulfillment stands if
    /// it is sequenced before the buyer's claim.
    pub fn fulfill_sell_order(&mut self, seller: AccountId) -> Result<(), EscrowError> {
        let custody = self.custody;
        let order = self
            .orders
            .get(&seller)
            .ok_or(EscrowError::OrderNotCommitted { seller })?;
        let buyer = order
            .buyer
            .ok_or(EscrowError::OrderNotCommitted { seller })?;
        let payout = order
            .settlement_payout()
            .ok_or(EscrowError::Transfer(LedgerError::BalanceOverflow {
                account: custody,
            }))?;
        let stake_value = order.stake_value;

        // The stake leg is the only transfer that can legitimately fail
        // here (missing allowance or unbonded balance), so it goes first;
        // custody holds payment plus collateral by construction.
        self.stake.transfer_from(&custody, &seller, &buyer, stake_value)?;
        self.settlement.transfer(&custody, &seller, payout)?;
        self.orders.remove(&seller);
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
