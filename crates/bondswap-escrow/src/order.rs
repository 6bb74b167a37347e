//! # Sell Orders
//!
//! A sell order is one seller's standing offer: deliver `stake_value` of
//! the stake token by `delivered_by` in exchange for `payment_value` of
//! the settlement asset, with `collateral_value` locked as the seller's
//! skin in the game.
//!
//! Orders only ever exist inside the order book's seller-keyed map.
//! Absence of a map entry is the one "no order" representation; there is
//! no zeroed tombstone record, and the absent buyer is an explicit
//! `Option`, not a sentinel identity.

use serde::{Deserialize, Serialize};

use bondswap_core::{AccountId, Amount, BlockHeight};

/// The terms a seller declares when creating an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrderTerms {
    /// Stake-token quantity the seller must deliver.
    pub stake_value: Amount,
    /// Settlement-asset price the buyer pays.
    pub payment_value: Amount,
    /// Settlement-asset collateral the seller locks.
    pub collateral_value: Amount,
    /// Height by which delivery must have happened.
    pub delivered_by: BlockHeight,
}

/// The lifecycle position of an existing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Created, no buyer yet.
    Open,
    /// A buyer has locked in payment.
    Committed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "OPEN",
            Self::Committed => "COMMITTED",
        };
        f.write_str(s)
    }
}

/// One seller's active sell order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrder {
    /// Stake-token quantity the seller must deliver.
    pub stake_value: Amount,
    /// Settlement-asset price the buyer pays.
    pub payment_value: Amount,
    /// Settlement-asset collateral locked by the seller.
    pub collateral_value: Amount,
    /// Height by which delivery must have happened.
    pub delivered_by: BlockHeight,
    /// The committed buyer, once one has locked in payment.
    pub buyer: Option<AccountId>,
}

impl SellOrder {
    /// An open order with the given terms and no buyer.
    pub(crate) fn open(terms: SellOrderTerms) -> Self {
        Self {
            stake_value: terms.stake_value,
            payment_value: terms.payment_value,
            collateral_value: terms.collateral_value,
            delivered_by: terms.delivered_by,
            buyer: None,
        }
    }

    /// The order's lifecycle position.
    pub fn status(&self) -> OrderStatus {
        if self.buyer.is_some() {
            OrderStatus::Committed
        } else {
            OrderStatus::Open
        }
    }

    /// Payment plus collateral: the settlement-asset sum custody releases
    /// at claim or fulfillment. `None` if the sum would not fit, which
    /// custody accounting rules out for any order that was actually funded.
    pub fn settlement_payout(&self) -> Option<Amount> {
        self.payment_value.checked_add(self.collateral_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> SellOrderTerms {
        SellOrderTerms {
            stake_value: Amount::new(30),
            payment_value: Amount::new(20),
            collateral_value: Amount::new(10),
            delivered_by: BlockHeight::new(24),
        }
    }

    #[test]
    fn test_open_order_copies_terms_and_has_no_buyer() {
        let order = SellOrder::open(terms());
        assert_eq!(order.stake_value, Amount::new(30));
        assert_eq!(order.payment_value, Amount::new(20));
        assert_eq!(order.collateral_value, Amount::new(10));
        assert_eq!(order.delivered_by, BlockHeight::new(24));
        assert_eq!(order.buyer, None);
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_status_follows_buyer() {
        let mut order = SellOrder::open(terms());
        order.buyer = Some(AccountId::new());
        assert_eq!(order.status(), OrderStatus::Committed);
    }

    #[test]
    fn test_settlement_payout_is_payment_plus_collateral() {
        let order = SellOrder::open(terms());
        assert_eq!(order.settlement_payout(), Some(Amount::new(30)));
    }

    #[test]
    fn test_settlement_payout_overflow_is_none() {
        let mut order = SellOrder::open(terms());
        order.payment_value = Amount::new(u128::MAX);
        assert_eq!(order.settlement_payout(), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OrderStatus::Open.to_string(), "OPEN");
        assert_eq!(OrderStatus::Committed.to_string(), "COMMITTED");
    }

    #[test]
    fn test_order_serde_roundtrip() {
        let order = SellOrder::open(terms());
        let json = serde_json::to_string(&order).unwrap();
        let parsed: SellOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
