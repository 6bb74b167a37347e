//! # End-to-End Order Lifecycle
//!
//! Drives the escrow core against the real in-memory collaborators:
//! the reference trade, the post-deadline claim/fulfill race in both
//! orders, cancellation refunds, and slot reuse across trades.

use bondswap_core::{AccountId, Amount, BlockHeight};
use bondswap_escrow::{EscrowError, OrderBook, SellOrderTerms};
use bondswap_ledger::{AssetLedger, RoundTableOracle, TokenLedger, UnbondingOracle};

const ROUND_LENGTH_BLOCKS: u64 = 2;
const UNBONDING_ROUNDS: u64 = 7;
const UNBONDING_BLOCKS: u64 = ROUND_LENGTH_BLOCKS * UNBONDING_ROUNDS;

struct Harness {
    book: OrderBook<TokenLedger, TokenLedger, RoundTableOracle>,
    seller: AccountId,
    buyer: AccountId,
    start: BlockHeight,
    delivered_by: BlockHeight,
}

/// Reference trade setup: stake 30 for payment 20 with collateral 10,
/// deadline ten blocks past the unbonding window, both parties funded
/// with 100 and all approvals in place.
fn harness() -> Harness {
    let seller = AccountId::new();
    let buyer = AccountId::new();

    let mut settlement = TokenLedger::new();
    settlement.mint(seller, Amount::new(100)).unwrap();
    settlement.mint(buyer, Amount::new(100)).unwrap();
    let mut stake = TokenLedger::new();
    stake.mint(seller, Amount::new(100)).unwrap();

    let oracle = RoundTableOracle::new(ROUND_LENGTH_BLOCKS, UNBONDING_ROUNDS);
    let mut book = OrderBook::new(settlement, stake, oracle);

    let custody = book.custody_account();
    book.settlement_mut().approve(seller, custody, Amount::new(10));
    book.settlement_mut().approve(buyer, custody, Amount::new(20));
    book.stake_mut().approve(seller, custody, Amount::new(30));

    let start = BlockHeight::new(1_000);
    Harness {
        book,
        seller,
        buyer,
        start,
        delivered_by: start.advance(UNBONDING_BLOCKS + 10),
    }
}

fn reference_terms(h: &Harness) -> SellOrderTerms {
    SellOrderTerms {
        stake_value: Amount::new(30),
        payment_value: Amount::new(20),
        collateral_value: Amount::new(10),
        delivered_by: h.delivered_by,
    }
}

fn create_and_commit(h: &mut Harness) {
    let terms = reference_terms(h);
    h.book.create_sell_order(h.seller, terms, h.start).unwrap();
    h.book.commit_to_buy(h.buyer, h.seller, h.start).unwrap();
}

// ── The reference trade ──────────────────────────────────────────────

#[test]
fn reference_trade_settles_exact_amounts() {
    let mut h = harness();
    let terms = reference_terms(&h);

    h.book.create_sell_order(h.seller, terms, h.start).unwrap();
    h.book.commit_to_buy(h.buyer, h.seller, h.start).unwrap();

    // Fulfillment carries no height gate; delivery happened off-escrow.
    h.book.fulfill_sell_order(h.seller).unwrap();

    // Seller: paid 10 collateral in, got 20 payment + 10 collateral
    // back, net +20 settlement; delivered 30 stake.
    assert_eq!(h.book.settlement().balance_of(&h.seller), Amount::new(120));
    assert_eq!(h.book.stake().balance_of(&h.seller), Amount::new(70));
    // Buyer: paid 20 settlement, received 30 stake.
    assert_eq!(h.book.settlement().balance_of(&h.buyer), Amount::new(80));
    assert_eq!(h.book.stake().balance_of(&h.buyer), Amount::new(30));
    // Custody drained, slot empty.
    let custody = h.book.custody_account();
    assert_eq!(h.book.settlement().balance_of(&custody), Amount::ZERO);
    assert_eq!(h.book.order(&h.seller), None);
}

#[test]
fn full_window_walkthrough() {
    let mut h = harness();
    let terms = reference_terms(&h);
    h.book.create_sell_order(h.seller, terms, h.start).unwrap();

    // The oracle pins the window: the whole trailing span before the
    // deadline rejects commitment, one block earlier accepts it.
    let period = UNBONDING_BLOCKS;
    let first_inside = h.delivered_by.rewind(period);
    assert!(matches!(
        h.book.commit_to_buy(h.buyer, h.seller, first_inside),
        Err(EscrowError::WithinUnbondingWindow { .. })
    ));
    assert!(matches!(
        h.book.commit_to_buy(h.buyer, h.seller, h.delivered_by),
        Err(EscrowError::WithinUnbondingWindow { .. })
    ));

    let last_outside = h.delivered_by.rewind(period + 1);
    h.book.commit_to_buy(h.buyer, h.seller, last_outside).unwrap();
}

// ── The post-deadline race ───────────────────────────────────────────

#[test]
fn claim_first_wins_then_fulfill_fails_clean() {
    let mut h = harness();
    create_and_commit(&mut h);

    h.book
        .claim_collateral_and_payment(h.buyer, h.seller, h.delivered_by)
        .unwrap();

    // The seller's late fulfillment finds the slot empty and pays nobody.
    let result = h.book.fulfill_sell_order(h.seller);
    assert_eq!(
        result,
        Err(EscrowError::OrderNotCommitted { seller: h.seller })
    );

    // Single payout only: buyer ends +10 (collateral), seller -10.
    assert_eq!(h.book.settlement().balance_of(&h.buyer), Amount::new(110));
    assert_eq!(h.book.settlement().balance_of(&h.seller), Amount::new(90));
    assert_eq!(h.book.stake().balance_of(&h.buyer), Amount::ZERO);
}

#[test]
fn fulfill_first_wins_then_claim_fails_clean() {
    let mut h = harness();
    create_and_commit(&mut h);

    h.book.fulfill_sell_order(h.seller).unwrap();

    let result = h
        .book
        .claim_collateral_and_payment(h.buyer, h.seller, h.delivered_by);
    assert_eq!(
        result,
        Err(EscrowError::OrderNotInitialized { seller: h.seller })
    );

    // Single settlement: the fulfillment payout stands.
    assert_eq!(h.book.settlement().balance_of(&h.seller), Amount::new(120));
    assert_eq!(h.book.settlement().balance_of(&h.buyer), Amount::new(80));
    assert_eq!(h.book.stake().balance_of(&h.buyer), Amount::new(30));
}

// ── Cancellation refunds ─────────────────────────────────────────────

#[test]
fn cancel_after_commit_makes_everyone_whole() {
    let mut h = harness();
    create_and_commit(&mut h);

    h.book.cancel_sell_order(h.seller).unwrap();

    assert_eq!(h.book.settlement().balance_of(&h.seller), Amount::new(100));
    assert_eq!(h.book.settlement().balance_of(&h.buyer), Amount::new(100));
    let custody = h.book.custody_account();
    assert_eq!(h.book.settlement().balance_of(&custody), Amount::ZERO);
}

// ── Slot reuse across trades ─────────────────────────────────────────

#[test]
fn slot_is_reusable_after_each_terminal_transition() {
    let mut h = harness();
    let custody = h.book.custody_account();

    // Trade 1 ends in fulfillment.
    create_and_commit(&mut h);
    h.book.fulfill_sell_order(h.seller).unwrap();

    // Trade 2 ends in a buyer claim.
    h.book.settlement_mut().approve(h.seller, custody, Amount::new(10));
    h.book.settlement_mut().approve(h.buyer, custody, Amount::new(20));
    create_and_commit(&mut h);
    h.book
        .claim_collateral_and_payment(h.buyer, h.seller, h.delivered_by)
        .unwrap();

    // Trade 3 ends in cancellation; the slot keeps working.
    h.book.settlement_mut().approve(h.seller, custody, Amount::new(10));
    let terms = reference_terms(&h);
    h.book.create_sell_order(h.seller, terms, h.start).unwrap();
    h.book.cancel_sell_order(h.seller).unwrap();

    assert_eq!(h.book.order(&h.seller), None);
    assert_eq!(h.book.settlement().balance_of(&custody), Amount::ZERO);
}

// ── Per-seller staking configuration ─────────────────────────────────

#[test]
fn per_seller_unbonding_override_widens_the_window() {
    let seller = AccountId::new();
    let buyer = AccountId::new();

    let mut settlement = TokenLedger::new();
    settlement.mint(seller, Amount::new(100)).unwrap();
    settlement.mint(buyer, Amount::new(100)).unwrap();
    let stake = TokenLedger::new();

    let mut oracle = RoundTableOracle::new(ROUND_LENGTH_BLOCKS, UNBONDING_ROUNDS);
    oracle.set_unbonding_rounds(seller, UNBONDING_ROUNDS * 2);
    let period = oracle.unbonding_period_blocks(&seller, BlockHeight::GENESIS);
    assert_eq!(period, UNBONDING_BLOCKS * 2);

    let mut book = OrderBook::new(settlement, stake, oracle);
    let custody = book.custody_account();
    book.settlement_mut().approve(seller, custody, Amount::new(10));
    book.settlement_mut().approve(buyer, custody, Amount::new(20));

    let start = BlockHeight::new(1_000);
    let delivered_by = start.advance(UNBONDING_BLOCKS + 10);
    let terms = SellOrderTerms {
        stake_value: Amount::new(30),
        payment_value: Amount::new(20),
        collateral_value: Amount::new(10),
        delivered_by,
    };
    book.create_sell_order(seller, terms, start).unwrap();

    // With the doubled unbonding period the creation height itself is
    // already inside this seller's window.
    let result = book.commit_to_buy(buyer, seller, start);
    assert!(matches!(
        result,
        Err(EscrowError::WithinUnbondingWindow { .. })
    ));
}
