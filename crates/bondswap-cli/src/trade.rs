//! # Trade Scenario
//!
//! The happy path: create, commit, deliver, fulfill. The seller ends up
//! with the payment plus their returned collateral, the buyer with the
//! stake.

use anyhow::Result;

use crate::scenario::{Scenario, ScenarioArgs};

/// Run a full successful trade.
pub fn run(args: &ScenarioArgs) -> Result<()> {
    let mut s = Scenario::build(args)?;
    s.log_balances("initial");

    s.book.create_sell_order(s.seller, s.terms, s.start)?;
    tracing::info!(seller = %s.seller, order = %s.order_snapshot()?, "sell order created");
    s.log_balances("created");

    s.book.commit_to_buy(s.buyer, s.seller, s.start)?;
    tracing::info!(buyer = %s.buyer, "buyer committed");
    s.log_balances("committed");

    s.book.fulfill_sell_order(s.seller)?;
    tracing::info!(seller = %s.seller, "order fulfilled, stake delivered");
    s.log_balances("fulfilled");

    Ok(())
}
