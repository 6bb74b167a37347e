//! # bondswap-cli — Scenario Drivers
//!
//! Handler modules for the `bondswap` binary. Each subcommand wires two
//! in-memory token ledgers and a round-table oracle into an order book,
//! then drives one complete lifecycle so the escrow mechanics can be
//! observed end to end from a terminal.

pub mod scenario;
pub mod timeout;
pub mod trade;
