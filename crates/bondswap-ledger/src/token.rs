//! # In-Memory Token Ledger
//!
//! Map-backed reference implementation of [`AssetLedger`]. Deterministic
//! and dependency-free, it backs both asset sides in tests and in the CLI
//! demo. Balances use checked arithmetic throughout, so a ledger can
//! never wrap a balance no matter what sequence of mints and transfers it
//! sees.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use bondswap_core::{AccountId, Amount};

use crate::asset::{AssetLedger, LedgerError};

/// An in-memory asset ledger: balances plus owner → (spender → allowance).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenLedger {
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<AccountId, HashMap<AccountId, Amount>>,
}

impl TokenLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `value` to `account` out of thin air.
    ///
    /// Scenario setup only; there is no corresponding burn.
    pub fn mint(&mut self, account: AccountId, value: Amount) -> Result<(), LedgerError> {
        let balance = self.balance_of(&account);
        let credited = balance
            .checked_add(value)
            .ok_or(LedgerError::BalanceOverflow { account })?;
        self.balances.insert(account, credited);
        Ok(())
    }

    /// Sum of all balances on this ledger.
    pub fn total_supply(&self) -> Amount {
        // Mints are overflow-checked, so the sum of balances fits.
        self.balances
            .values()
            .fold(Amount::ZERO, |acc, b| acc.checked_add(*b).unwrap_or(acc))
    }

    /// Compute both post-transfer balances before writing either, so a
    /// failure cannot leave a half-applied transfer.
    fn checked_move(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        value: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self.balance_of(from);
        let debited = from_balance
            .checked_sub(value)
            .ok_or(LedgerError::InsufficientBalance {
                account: *from,
                balance: from_balance,
                required: value,
            })?;

        if from == to {
            return Ok(());
        }

        let to_balance = self.balance_of(to);
        let credited = to_balance
            .checked_add(value)
            .ok_or(LedgerError::BalanceOverflow { account: *to })?;

        self.balances.insert(*from, debited);
        self.balances.insert(*to, credited);
        Ok(())
    }
}

impl AssetLedger for TokenLedger {
    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn approve(&mut self, owner: AccountId, spender: AccountId, value: Amount) {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, value);
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        value: Amount,
    ) -> Result<(), LedgerError> {
        self.checked_move(from, to, value)
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        value: Amount,
    ) -> Result<(), LedgerError> {
        let allowance = self.allowance(owner, spender);
        let remaining =
            allowance
                .checked_sub(value)
                .ok_or(LedgerError::InsufficientAllowance {
                    owner: *owner,
                    spender: *spender,
                    allowance,
                    required: value,
                })?;

        // Move first: a failed move must leave the allowance intact.
        self.checked_move(owner, to, value)?;
        self.allowances
            .entry(*owner)
            .or_default()
            .insert(*spender, remaining);
        Ok(())
    }
}
