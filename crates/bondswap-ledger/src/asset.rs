//! # Asset Ledger Capability
//!
//! The move-value primitive consumed by the escrow. The shape follows the
//! familiar token-ledger contract surface: direct transfers spend the
//! caller's own balance, delegated transfers spend a previously approved
//! allowance.
//!
//! ## Invariant
//!
//! Transfers are all-or-nothing. An implementation must not debit one
//! account without crediting the other, and must not consume allowance
//! for a transfer that fails.

use bondswap_core::{AccountId, Amount};
use thiserror::Error;

/// Errors surfaced by an asset ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The paying account does not hold enough of the asset.
    #[error("insufficient balance for {account}: have {balance}, need {required}")]
    InsufficientBalance {
        /// The account that was debited.
        account: AccountId,
        /// Its balance at the time of the call.
        balance: Amount,
        /// The amount the transfer required.
        required: Amount,
    },

    /// The spender's allowance from the owner does not cover the transfer.
    #[error("insufficient allowance from {owner} to {spender}: have {allowance}, need {required}")]
    InsufficientAllowance {
        /// The account whose funds would be spent.
        owner: AccountId,
        /// The account attempting the delegated spend.
        spender: AccountId,
        /// The approved allowance at the time of the call.
        allowance: Amount,
        /// The amount the transfer required.
        required: Amount,
    },

    /// Crediting the recipient would overflow its balance.
    #[error("balance overflow crediting {account}")]
    BalanceOverflow {
        /// The account whose balance would have wrapped.
        account: AccountId,
    },
}

/// A balance ledger for one asset, with allowance-based delegated spends.
///
/// The escrow holds one instance for the settlement asset and one for the
/// stake token; it never assumes the two share state.
pub trait AssetLedger {
    /// The balance held by `account`.
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// The amount `spender` may currently move out of `owner`'s balance.
    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount;

    /// Set the allowance from `owner` to `spender` to exactly `value`.
    fn approve(&mut self, owner: AccountId, spender: AccountId, value: Amount);

    /// Move `value` from `from` to `to`, spending `from`'s own balance.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        value: Amount,
    ) -> Result<(), LedgerError>;

    /// Move `value` from `owner` to `to` on the authority of `spender`,
    /// consuming that much of `spender`'s allowance from `owner`.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        value: Amount,
    ) -> Result<(), LedgerError>;
}
