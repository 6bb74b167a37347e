//! # Account Identity Newtype
//!
//! Newtype wrapper for the identities that hold balances, create orders,
//! and commit to them. Sellers, buyers, and the escrow's own custody
//! account are all `AccountId`s.
//!
//! There is no "zero" or "null" account. Absence of a counterparty is
//! expressed as `Option<AccountId>` at the use site, never as a sentinel
//! value that could collide with a real identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a balance-holding party (seller, buyer, or the
/// escrow custody account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accounts_are_distinct() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_prefix() {
        let a = AccountId::new();
        let rendered = a.to_string();
        assert!(rendered.starts_with("account:"));
        assert!(rendered.contains(&a.as_uuid().to_string()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let a = AccountId::new();
        let json = serde_json::to_string(&a).unwrap();
        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(a, parsed);
    }
}
