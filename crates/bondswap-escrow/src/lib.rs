//! # bondswap-escrow — The Order Lifecycle Core
//!
//! Peer-to-peer escrow for trading a bonded, time-locked stake token
//! against a stable settlement asset. A seller locks collateral and
//! declares terms; one buyer locks payment; funds release on delivery or
//! revert on timeout and cancellation, with no intermediary ever holding
//! both sides' funds outside the rules of the state machine.
//!
//! The crate owns exactly one piece of state, the [`OrderBook`]: a map
//! from seller identity to at most one [`SellOrder`], plus the custody
//! account. Asset movement and staking knowledge are consumed through
//! the capability traits in `bondswap-ledger`, so the whole lifecycle is
//! testable against deterministic in-memory collaborators.
//!
//! ## Operations
//!
//! - [`OrderBook::create_sell_order`]: lock collateral, open the order.
//! - [`OrderBook::cancel_sell_order`]: seller backs out, funds revert.
//! - [`OrderBook::commit_to_buy`]: buyer locks payment, gated by the
//!   unbonding window.
//! - [`OrderBook::claim_collateral_and_payment`]: buyer's recourse after
//!   a missed deadline.
//! - [`OrderBook::fulfill_sell_order`]: seller delivers and collects.

pub mod book;
pub mod error;
pub mod order;

pub use book::OrderBook;
pub use error::EscrowError;
pub use order::{OrderStatus, SellOrder, SellOrderTerms};
