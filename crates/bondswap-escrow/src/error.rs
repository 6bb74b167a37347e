//! # Escrow Errors
//!
//! Every rejection the order book can produce. Precondition violations
//! identify the slot and the guard that failed; collaborator failures
//! wrap [`LedgerError`] verbatim. All errors are per-call and leave the
//! book unchanged.

use thiserror::Error;

use bondswap_core::{AccountId, BlockHeight};
use bondswap_ledger::LedgerError;

/// Rejections from order-book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscrowError {
    /// The seller already has an active order.
    #[error("seller {seller} already has an active sell order")]
    OrderAlreadyInitialized {
        /// The seller whose slot is occupied.
        seller: AccountId,
    },

    /// No order exists for the seller.
    #[error("no sell order exists for seller {seller}")]
    OrderNotInitialized {
        /// The seller whose slot is empty.
        seller: AccountId,
    },

    /// The declared delivery deadline is not in the future.
    #[error("delivery deadline {delivered_by} is not after current height {current}")]
    DeliveryDeadlineInPast {
        /// The declared deadline.
        delivered_by: BlockHeight,
        /// The height at the time of the call.
        current: BlockHeight,
    },

    /// The order would sell a zero stake quantity.
    #[error("sell order for {seller} must offer a nonzero stake value")]
    ZeroSellValue {
        /// The seller attempting the creation.
        seller: AccountId,
    },

    /// The order already has a committed buyer.
    #[error("sell order for {seller} is already committed to a buyer")]
    AlreadyCommitted {
        /// The seller whose order is committed.
        seller: AccountId,
    },

    /// Commitment arrived inside the unbonding window: the stake could
    /// not become liquid before the delivery deadline.
    #[error(
        "commitment at {current} is within the unbonding window: \
         {unbonding_period_blocks} unbonding blocks reach past deadline {delivered_by}"
    )]
    WithinUnbondingWindow {
        /// The height at the time of the call.
        current: BlockHeight,
        /// The order's delivery deadline.
        delivered_by: BlockHeight,
        /// The oracle's unbonding period for this seller.
        unbonding_period_blocks: u64,
    },

    /// The caller is not the order's committed buyer.
    #[error("caller {caller} is not the committed buyer of {seller}'s order")]
    NotBuyer {
        /// The seller whose order was targeted.
        seller: AccountId,
        /// The non-buyer caller.
        caller: AccountId,
    },

    /// The delivery deadline has not been reached yet.
    #[error("order is locked until {delivered_by}, current height is {current}")]
    StillWithinLockPeriod {
        /// The order's delivery deadline.
        delivered_by: BlockHeight,
        /// The height at the time of the call.
        current: BlockHeight,
    },

    /// The order has no committed buyer (or does not exist at all).
    #[error("sell order for {seller} has no committed buyer")]
    OrderNotCommitted {
        /// The targeted seller.
        seller: AccountId,
    },

    /// An asset ledger refused a transfer; surfaced verbatim.
    #[error("asset transfer failed: {0}")]
    Transfer(#[from] LedgerError),
}
