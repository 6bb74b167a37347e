//! # Timeout Scenario
//!
//! The recourse path: the seller never delivers, the chain reaches the
//! deadline, and the committed buyer claims their payment back plus the
//! seller's forfeited collateral.

use anyhow::Result;

use crate::scenario::{Scenario, ScenarioArgs};

/// Run a missed-delivery trade ending in a buyer claim.
pub fn run(args: &ScenarioArgs) -> Result<()> {
    let mut s = Scenario::build(args)?;
    s.log_balances("initial");

    s.book.create_sell_order(s.seller, s.terms, s.start)?;
    tracing::info!(seller = %s.seller, order = %s.order_snapshot()?, "sell order created");

    s.book.commit_to_buy(s.buyer, s.seller, s.start)?;
    tracing::info!(buyer = %s.buyer, "buyer committed");
    s.log_balances("committed");

    let deadline = s.terms.delivered_by;
    tracing::info!(%deadline, "seller missed delivery, advancing to deadline");

    s.book
        .claim_collateral_and_payment(s.buyer, s.seller, deadline)?;
    tracing::info!(buyer = %s.buyer, "buyer claimed payment and collateral");
    s.log_balances("claimed");

    Ok(())
}
