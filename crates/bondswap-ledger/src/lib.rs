//! # bondswap-ledger — Injected Collaborators
//!
//! The escrow core does not own any asset; it moves value through
//! capability traits defined here and queries staking liquidity through
//! an oracle trait. This crate defines those seams and ships the
//! deterministic in-memory implementations used by tests and the CLI.
//!
//! ## Contents
//!
//! - **`AssetLedger`** (`asset.rs`): the move-value primitive with
//!   balance, allowance, and transfer semantics. Two independent
//!   instances back the settlement asset and the stake token.
//!
//! - **`TokenLedger`** (`token.rs`): map-backed reference implementation
//!   of `AssetLedger` with overflow-checked balance arithmetic.
//!
//! - **`UnbondingOracle`** (`staking.rs`): reports how many blocks a
//!   seller's stake takes to become liquid, derived from the staking
//!   round configuration.
//!
//! ## Crate Policy
//!
//! - Every operation is all-or-nothing: a failed transfer leaves both
//!   balances and allowances untouched.
//! - No `panic!()` or `.unwrap()` outside tests; arithmetic failures
//!   surface as `LedgerError`.

pub mod asset;
pub mod staking;
pub mod token;

pub use asset::{AssetLedger, LedgerError};
pub use staking::{RoundTableOracle, UnbondingOracle};
pub use token::TokenLedger;
