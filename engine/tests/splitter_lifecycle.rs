//! Integration tests driving the splitter engine against the nullable ledger:
//! create → pay → automatic or manual payout → update → delete.
//!
//! Every failure case checks that no store changed.

use paysplit_engine::{
    AutoPayout, Ledger, OperationEvaluator, OperationResult, PaymentAccumulator, PayoutEngine,
    SplitterError, SplitterRegistry,
};
use paysplit_nullables::NullLedger;
use paysplit_operations::{
    MarketBuyback, Operation, OperationError, PaymentTarget, SplitterCreateOp, SplitterDeleteOp,
    SplitterPayOp, SplitterPayoutOp, SplitterUpdateOp,
};
use paysplit_store::{AccountStore, OrderBook, SplitterStore};
use paysplit_types::{AccountId, Asset, AssetId, ChainParams, Price, ShareAmount, SplitterId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const USD: AssetId = AssetId::new(1);
const OWNER: AccountId = AccountId::new(10);
const ALICE: AccountId = AccountId::new(11);
const BOB: AccountId = AccountId::new(12);
const CAROL: AccountId = AccountId::new(13);
const PAYER: AccountId = AccountId::new(20);
const PAYER_FUNDS: ShareAmount = 1_000_000;

fn ledger() -> NullLedger {
    NullLedger::new()
        .with_account(OWNER, Asset::core(10_000_000))
        .with_empty_account(ALICE)
        .with_empty_account(BOB)
        .with_empty_account(CAROL)
        .with_account(PAYER, Asset::new(PAYER_FUNDS, USD))
}

fn create_op(targets: Vec<PaymentTarget>, threshold: ShareAmount) -> SplitterCreateOp {
    SplitterCreateOp {
        fee: Asset::core(0),
        payer: OWNER,
        owner: OWNER,
        targets,
        min_payment: Asset::new(1, USD),
        max_payment: PAYER_FUNDS,
        payout_threshold: threshold,
    }
}

fn alice_and_bob() -> Vec<PaymentTarget> {
    vec![PaymentTarget::account(1, ALICE), PaymentTarget::account(3, BOB)]
}

fn pay_op(splitter_id: SplitterId, amount: ShareAmount) -> SplitterPayOp {
    SplitterPayOp {
        fee: Asset::core(0),
        splitter_id,
        paying_account: PAYER,
        payment: Asset::new(amount, USD),
    }
}

fn payout_op(splitter_id: SplitterId) -> SplitterPayoutOp {
    SplitterPayoutOp {
        fee: Asset::core(0),
        splitter_id,
        owner: OWNER,
    }
}

fn delete_op(splitter_id: SplitterId) -> SplitterDeleteOp {
    SplitterDeleteOp {
        fee: Asset::core(0),
        splitter_id,
        owner: OWNER,
    }
}

fn usd(ledger: &NullLedger, account: AccountId) -> ShareAmount {
    ledger.accounts.balance(&account, &USD).unwrap()
}

fn stored_balance(ledger: &NullLedger, id: SplitterId) -> ShareAmount {
    ledger.splitters.get_splitter(&id).unwrap().balance.amount
}

/// Create a splitter and fund it below its threshold.
fn funded(ledger: &NullLedger, targets: Vec<PaymentTarget>, amount: ShareAmount) -> SplitterId {
    let id = SplitterRegistry::new(ledger)
        .create(&create_op(targets, 0))
        .unwrap();
    PaymentAccumulator::new(ledger, 0)
        .pay(&pay_op(id, amount))
        .unwrap();
    id
}

// ---------------------------------------------------------------------------
// Payments and automatic payout
// ---------------------------------------------------------------------------

#[test]
fn payment_over_threshold_pays_out_once_after_fee() {
    let ledger = ledger();
    let id = SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 100))
        .unwrap();

    let outcome = PaymentAccumulator::new(&ledger, 10)
        .pay(&pay_op(id, 110))
        .unwrap();

    let AutoPayout::Completed(report) = outcome.payout else {
        panic!("expected a completed payout, got {:?}", outcome.payout);
    };
    assert_eq!(report.fee, Asset::new(10, USD));
    assert_eq!(report.distributed, Asset::new(100, USD));
    assert_eq!(report.shares.len(), 2);
    assert_eq!(report.shares[0].amount, 25);
    assert_eq!(report.shares[1].amount, 75);

    assert_eq!(outcome.balance, Asset::zero(USD));
    assert_eq!(stored_balance(&ledger, id), 0);
    assert_eq!(usd(&ledger, ALICE), 25);
    assert_eq!(usd(&ledger, BOB), 75);
    assert_eq!(usd(&ledger, PAYER), PAYER_FUNDS - 110);
    assert_eq!(ledger.accounts.fee_pool(&USD), 10);
}

#[test]
fn payment_below_threshold_accumulates() {
    let ledger = ledger();
    let id = SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 100))
        .unwrap();
    let accumulator = PaymentAccumulator::new(&ledger, 10);

    let first = accumulator.pay(&pay_op(id, 40)).unwrap();
    assert_eq!(first.payout, AutoPayout::NotTriggered);
    let second = accumulator.pay(&pay_op(id, 50)).unwrap();
    assert_eq!(second.balance, Asset::new(90, USD));

    assert_eq!(stored_balance(&ledger, id), 90);
    assert_eq!(usd(&ledger, ALICE), 0);
    assert_eq!(usd(&ledger, PAYER), PAYER_FUNDS - 90);
}

#[test]
fn zero_threshold_never_pays_out_automatically() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 500);
    assert_eq!(stored_balance(&ledger, id), 500);
    assert_eq!(usd(&ledger, BOB), 0);
}

#[test]
fn payment_in_wrong_asset_changes_nothing() {
    let ledger = ledger();
    let id = SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 100))
        .unwrap();
    let mut op = pay_op(id, 5);
    op.paying_account = OWNER;
    op.payment = Asset::core(5);

    let err = PaymentAccumulator::new(&ledger, 0).pay(&op).unwrap_err();

    assert!(matches!(
        err,
        SplitterError::AssetMismatch { expected, provided } if expected == USD && provided == AssetId::CORE
    ));
    assert_eq!(stored_balance(&ledger, id), 0);
    assert_eq!(
        ledger.accounts.balance(&OWNER, &AssetId::CORE).unwrap(),
        10_000_000
    );
}

#[test]
fn payment_outside_bounds_is_rejected() {
    let ledger = ledger();
    let mut create = create_op(alice_and_bob(), 0);
    create.min_payment = Asset::new(10, USD);
    create.max_payment = 20;
    let id = SplitterRegistry::new(&ledger).create(&create).unwrap();
    let accumulator = PaymentAccumulator::new(&ledger, 0);

    for amount in [9, 21] {
        let err = accumulator.pay(&pay_op(id, amount)).unwrap_err();
        assert!(matches!(
            err,
            SplitterError::Validation(OperationError::PaymentOutOfRange { min: 10, max: 20, .. })
        ));
    }
    assert!(accumulator.pay(&pay_op(id, 10)).is_ok());
    assert!(accumulator.pay(&pay_op(id, 20)).is_ok());
    assert_eq!(stored_balance(&ledger, id), 30);
}

#[test]
fn payer_without_funds_changes_nothing() {
    let ledger = ledger();
    let id = SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 0))
        .unwrap();
    let mut op = pay_op(id, 5);
    op.paying_account = ALICE;

    let err = PaymentAccumulator::new(&ledger, 0).pay(&op).unwrap_err();
    assert!(matches!(err, SplitterError::Store(_)));
    assert_eq!(stored_balance(&ledger, id), 0);
}

#[test]
fn failed_splitter_write_refunds_payer() {
    let ledger = ledger();
    let id = SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 0))
        .unwrap();
    ledger.splitters.fail_writes(true);

    let err = PaymentAccumulator::new(&ledger, 0)
        .pay(&pay_op(id, 5))
        .unwrap_err();

    assert!(matches!(err, SplitterError::Store(_)));
    assert_eq!(usd(&ledger, PAYER), PAYER_FUNDS);
    assert_eq!(stored_balance(&ledger, id), 0);
}

#[test]
fn failed_create_does_not_consume_an_id() {
    let ledger = ledger();
    let registry = SplitterRegistry::new(&ledger);
    ledger.splitters.fail_writes(true);
    let err = registry.create(&create_op(alice_and_bob(), 0)).unwrap_err();
    assert!(matches!(err, SplitterError::Store(_)));
    assert!(ledger.splitters.is_empty());

    ledger.splitters.fail_writes(false);
    let first = registry.create(&create_op(alice_and_bob(), 0)).unwrap();
    let second = registry.create(&create_op(alice_and_bob(), 0)).unwrap();
    assert_eq!(first, SplitterId::new(0));
    assert_eq!(second, SplitterId::new(1));
}

#[test]
fn payment_to_unknown_splitter_is_not_found() {
    let ledger = ledger();
    let err = PaymentAccumulator::new(&ledger, 0)
        .pay(&pay_op(SplitterId::new(42), 5))
        .unwrap_err();
    assert!(matches!(err, SplitterError::NotFound(id) if id == SplitterId::new(42)));
    assert_eq!(usd(&ledger, PAYER), PAYER_FUNDS);
}

#[test]
fn failed_automatic_payout_keeps_payment() {
    let ledger = ledger();
    let id = SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 100))
        .unwrap();

    // fee exceeds the balance
    let outcome = PaymentAccumulator::new(&ledger, 200)
        .pay(&pay_op(id, 150))
        .unwrap();

    assert!(matches!(outcome.payout, AutoPayout::Deferred { .. }));
    assert_eq!(outcome.balance, Asset::new(150, USD));
    assert_eq!(stored_balance(&ledger, id), 150);
    assert_eq!(usd(&ledger, PAYER), PAYER_FUNDS - 150);
    assert_eq!(usd(&ledger, ALICE), 0);
    assert_eq!(ledger.accounts.fee_pool(&USD), 0);
}

// ---------------------------------------------------------------------------
// Manual payout
// ---------------------------------------------------------------------------

#[test]
fn manual_payout_deducts_no_fee() {
    let ledger = ledger();
    let targets = vec![
        PaymentTarget::account(1, ALICE),
        PaymentTarget::account(1, BOB),
        PaymentTarget::account(1, CAROL),
    ];
    let id = funded(&ledger, targets, 10);

    let report = PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap();

    assert_eq!(report.fee, Asset::zero(USD));
    assert_eq!(report.distributed, Asset::new(10, USD));
    assert_eq!(usd(&ledger, ALICE), 4);
    assert_eq!(usd(&ledger, BOB), 3);
    assert_eq!(usd(&ledger, CAROL), 3);
    assert_eq!(stored_balance(&ledger, id), 0);
}

#[test]
fn payout_of_empty_splitter_succeeds_with_zero_shares() {
    let ledger = ledger();
    let id = SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 0))
        .unwrap();

    let report = PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap();
    assert!(report.shares.iter().all(|s| s.amount == 0));
    assert_eq!(usd(&ledger, ALICE), 0);
}

#[test]
fn payout_by_non_owner_is_unauthorized() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 40);
    let mut op = payout_op(id);
    op.owner = ALICE;

    let err = PayoutEngine::new(&ledger).payout(&op).unwrap_err();
    assert!(matches!(err, SplitterError::Authorization { caller, .. } if caller == ALICE));
    assert_eq!(stored_balance(&ledger, id), 40);
}

#[test]
fn fee_above_balance_is_insufficient_funds() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 5);
    let splitter = ledger.splitters.get_splitter(&id).unwrap();

    let err = PayoutEngine::new(&ledger)
        .distribute(&splitter, 10)
        .unwrap_err();

    assert!(matches!(err, SplitterError::InsufficientFunds { balance: 5, fee: 10 }));
    assert_eq!(stored_balance(&ledger, id), 5);
    assert_eq!(ledger.accounts.fee_pool(&USD), 0);
}

#[test]
fn failed_credit_rolls_back_earlier_shares() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 50);
    ledger.accounts.reject_credits_to(BOB);

    let err = PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap_err();

    assert!(matches!(err, SplitterError::TargetDispatch { index: 1, .. }));
    assert_eq!(usd(&ledger, ALICE), 0);
    assert_eq!(usd(&ledger, BOB), 0);
    assert_eq!(stored_balance(&ledger, id), 50);
}

#[test]
fn missing_target_account_fails_before_any_credit() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 50);
    ledger.accounts.close(&ALICE);

    let err = PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap_err();

    assert!(matches!(err, SplitterError::TargetDispatch { index: 0, .. }));
    assert_eq!(usd(&ledger, BOB), 0);
    assert_eq!(stored_balance(&ledger, id), 50);
}

#[test]
fn failed_fee_collection_rolls_back_shares() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 50);
    ledger.accounts.reject_fees(true);
    let splitter = ledger.splitters.get_splitter(&id).unwrap();

    assert!(PayoutEngine::new(&ledger).distribute(&splitter, 10).is_err());
    assert_eq!(usd(&ledger, ALICE), 0);
    assert_eq!(usd(&ledger, BOB), 0);
    assert_eq!(stored_balance(&ledger, id), 50);
}

// ---------------------------------------------------------------------------
// Market buyback targets
// ---------------------------------------------------------------------------

fn core_buyback() -> MarketBuyback {
    MarketBuyback::new(
        AssetId::CORE,
        Price::new(Asset::new(10, USD), Asset::core(1)),
    )
}

#[test]
fn buyback_share_becomes_limit_order_owned_by_splitter_owner() {
    let ledger = ledger();
    let targets = vec![
        PaymentTarget::account(1, ALICE),
        PaymentTarget::buyback(1, core_buyback()),
    ];
    let id = funded(&ledger, targets, 100);

    let report = PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap();

    assert_eq!(usd(&ledger, ALICE), 50);
    let order_id = report.shares[1].order.expect("buyback order placed");
    let order = ledger.orders.get_order(&order_id).unwrap();
    assert_eq!(order.seller, OWNER);
    assert_eq!(order.funded_by, id);
    assert_eq!(order.amount_to_sell, Asset::new(50, USD));
    assert_eq!(order.min_to_receive().unwrap(), Asset::core(5));
    assert!(report.shares[0].order.is_none());
}

#[test]
fn rejected_order_rolls_back_account_credit() {
    let ledger = ledger();
    let targets = vec![
        PaymentTarget::account(1, ALICE),
        PaymentTarget::buyback(1, core_buyback()),
    ];
    let id = funded(&ledger, targets, 100);
    ledger.orders.reject_all(true);

    let err = PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap_err();

    assert!(matches!(err, SplitterError::TargetDispatch { index: 1, .. }));
    assert_eq!(usd(&ledger, ALICE), 0);
    assert!(ledger.orders.open_orders().is_empty());
    assert_eq!(stored_balance(&ledger, id), 100);
}

#[test]
fn zero_share_places_no_order() {
    let ledger = ledger();
    let targets = vec![
        PaymentTarget::buyback(1, core_buyback()),
        PaymentTarget::account(1000, ALICE),
    ];
    let id = funded(&ledger, targets, 1);
    ledger.orders.reject_all(true);

    let report = PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap();

    assert_eq!(report.shares[0].amount, 0);
    assert!(report.shares[0].order.is_none());
    assert_eq!(usd(&ledger, ALICE), 1);
}

#[test]
fn create_rejects_malformed_buyback_price() {
    let ledger = ledger();
    let bad = MarketBuyback::new(
        AssetId::CORE,
        Price::new(Asset::new(10, USD), Asset::new(1, USD)),
    );
    let err = SplitterRegistry::new(&ledger)
        .create(&create_op(vec![PaymentTarget::buyback(1, bad)], 0))
        .unwrap_err();
    assert!(matches!(
        err,
        SplitterError::Validation(OperationError::InvalidBuyback { index: 0, .. })
    ));
    assert!(ledger.splitters.is_empty());
}

#[test]
fn create_rejects_buyback_priced_in_another_asset() {
    let ledger = ledger();
    let eur_priced = MarketBuyback::new(
        AssetId::CORE,
        Price::new(Asset::new(1, AssetId::new(2)), Asset::core(1)),
    );
    let targets = vec![
        PaymentTarget::account(1, ALICE),
        PaymentTarget::buyback(1, eur_priced),
    ];
    let err = SplitterRegistry::new(&ledger)
        .create(&create_op(targets, 0))
        .unwrap_err();
    assert!(matches!(
        err,
        SplitterError::Validation(OperationError::InvalidBuyback { index: 1, .. })
    ));
    assert!(ledger.splitters.is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

fn update_op(id: SplitterId, targets: Vec<PaymentTarget>) -> SplitterUpdateOp {
    SplitterUpdateOp {
        fee: Asset::core(0),
        splitter_id: id,
        owner: OWNER,
        new_owner: OWNER,
        targets,
        min_payment: Asset::new(1, USD),
        max_payment: PAYER_FUNDS,
        payout_threshold: 0,
    }
}

#[test]
fn update_replaces_targets_for_next_payout() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 60);

    let updated = SplitterRegistry::new(&ledger)
        .update(&update_op(id, vec![PaymentTarget::account(1, CAROL)]))
        .unwrap();
    assert_eq!(updated.balance, Asset::new(60, USD));

    PayoutEngine::new(&ledger).payout(&payout_op(id)).unwrap();
    assert_eq!(usd(&ledger, CAROL), 60);
    assert_eq!(usd(&ledger, ALICE), 0);
    assert_eq!(usd(&ledger, BOB), 0);
}

#[test]
fn update_transfers_ownership() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 10);
    let mut op = update_op(id, alice_and_bob());
    op.new_owner = CAROL;
    let registry = SplitterRegistry::new(&ledger);
    registry.update(&op).unwrap();

    // the old owner has lost control
    let err = registry.update(&update_op(id, alice_and_bob())).unwrap_err();
    assert!(matches!(err, SplitterError::Authorization { owner, .. } if owner == CAROL));
    assert_eq!(registry.splitters_by_owner(&CAROL).unwrap().len(), 1);
    assert!(registry.splitters_by_owner(&OWNER).unwrap().is_empty());
}

#[test]
fn update_by_non_owner_changes_nothing() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 10);
    let before = ledger.splitters.get_splitter(&id).unwrap();
    let mut op = update_op(id, vec![PaymentTarget::account(1, CAROL)]);
    op.owner = BOB;

    let err = SplitterRegistry::new(&ledger).update(&op).unwrap_err();
    assert!(matches!(err, SplitterError::Authorization { .. }));
    assert_eq!(ledger.splitters.get_splitter(&id).unwrap(), before);
}

#[test]
fn update_rechecks_buyback_prices_before_storing() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 10);
    let bad = MarketBuyback::new(
        AssetId::CORE,
        Price::new(Asset::new(0, USD), Asset::core(1)),
    );

    let err = SplitterRegistry::new(&ledger)
        .update(&update_op(id, vec![PaymentTarget::buyback(1, bad)]))
        .unwrap_err();
    assert!(matches!(
        err,
        SplitterError::Validation(OperationError::InvalidBuyback { .. })
    ));
    assert_eq!(
        ledger.splitters.get_splitter(&id).unwrap().targets,
        alice_and_bob()
    );
}

#[test]
fn update_rejects_buyback_priced_in_another_asset() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 10);
    let eur_priced = MarketBuyback::new(
        AssetId::CORE,
        Price::new(Asset::new(1, AssetId::new(2)), Asset::core(1)),
    );

    let err = SplitterRegistry::new(&ledger)
        .update(&update_op(id, vec![PaymentTarget::buyback(1, eur_priced)]))
        .unwrap_err();
    assert!(matches!(
        err,
        SplitterError::Validation(OperationError::InvalidBuyback { index: 0, .. })
    ));
    let stored = ledger.splitters.get_splitter(&id).unwrap();
    assert_eq!(stored.targets, alice_and_bob());
    assert_eq!(stored.balance, Asset::new(10, USD));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_empty_splitter_has_no_payout() {
    let ledger = ledger();
    let registry = SplitterRegistry::new(&ledger);
    let id = registry.create(&create_op(alice_and_bob(), 0)).unwrap();

    assert_eq!(registry.delete(&delete_op(id)).unwrap(), None);
    assert!(matches!(registry.get(&id), Err(SplitterError::NotFound(_))));
}

#[test]
fn delete_pays_out_remaining_balance_first() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 40);

    let report = SplitterRegistry::new(&ledger)
        .delete(&delete_op(id))
        .unwrap()
        .expect("final payout");

    assert_eq!(report.fee, Asset::zero(USD));
    assert_eq!(report.distributed, Asset::new(40, USD));
    assert_eq!(usd(&ledger, ALICE), 10);
    assert_eq!(usd(&ledger, BOB), 30);
    assert!(!ledger.splitters.splitter_exists(&id).unwrap());
}

#[test]
fn delete_keeps_splitter_when_final_payout_fails() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 40);
    ledger.accounts.reject_credits_to(ALICE);

    assert!(SplitterRegistry::new(&ledger).delete(&delete_op(id)).is_err());
    assert_eq!(stored_balance(&ledger, id), 40);
    assert_eq!(usd(&ledger, BOB), 0);
}

#[test]
fn delete_by_non_owner_is_unauthorized() {
    let ledger = ledger();
    let id = funded(&ledger, alice_and_bob(), 40);
    let mut op = delete_op(id);
    op.owner = PAYER;

    let err = SplitterRegistry::new(&ledger).delete(&op).unwrap_err();
    assert!(matches!(err, SplitterError::Authorization { .. }));
    assert!(ledger.splitters.splitter_exists(&id).unwrap());
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

#[test]
fn evaluator_applies_operations_in_order() {
    let ledger = ledger();
    let params = ChainParams::genesis_defaults().with_auto_payout_fee(10);
    let schedule = &params.fees;
    let id = SplitterId::new(0);

    let ops: Vec<Operation> = [
        Operation::Create(create_op(alice_and_bob(), 100)),
        Operation::Pay(pay_op(id, 50)),
        Operation::Pay(pay_op(id, 60)),
        Operation::Delete(delete_op(id)),
    ]
    .into_iter()
    .map(|op| op.with_required_fee(schedule).unwrap())
    .collect();

    let results = OperationEvaluator::new(&ledger, &params).apply_all(&ops);

    assert_eq!(results.len(), 4);
    let applied: Vec<_> = results.into_iter().map(Result::unwrap).collect();
    assert_eq!(applied[0].result, OperationResult::Created(id));
    assert_eq!(applied[0].fee_payer, OWNER);
    assert_eq!(applied[1].fee_payer, PAYER);
    match &applied[2].result {
        OperationResult::Paid(outcome) => {
            assert!(matches!(outcome.payout, AutoPayout::Completed(_)))
        }
        other => panic!("expected a payment, got {other:?}"),
    }
    assert_eq!(
        applied[3].result,
        OperationResult::Deleted { final_payout: None }
    );
    assert_eq!(usd(&ledger, ALICE), 25);
    assert_eq!(usd(&ledger, BOB), 75);
    assert_eq!(ledger.summary().unwrap().splitters, 0);
}

#[test]
fn evaluator_rejects_short_fee_without_side_effects() {
    let ledger = ledger();
    let params = ChainParams::genesis_defaults();
    let op = Operation::Create(create_op(alice_and_bob(), 0));

    let err = OperationEvaluator::new(&ledger, &params)
        .apply(&op)
        .unwrap_err();

    assert!(matches!(
        err,
        SplitterError::Validation(OperationError::InsufficientFee { provided: 0, .. })
    ));
    assert!(ledger.splitters.is_empty());
}

#[test]
fn evaluator_rejects_fee_in_non_core_asset() {
    let ledger = ledger();
    let params = ChainParams::genesis_defaults();
    let mut create = create_op(alice_and_bob(), 0);
    create.fee = Asset::new(1_000_000_000, USD);

    let err = OperationEvaluator::new(&ledger, &params)
        .apply(&Operation::Create(create))
        .unwrap_err();
    assert!(matches!(err, SplitterError::Validation(OperationError::FeeAsset(_))));
}

#[test]
fn failed_operation_does_not_stop_later_ones() {
    let ledger = ledger();
    let params = ChainParams::genesis_defaults();
    let schedule = &params.fees;
    let ops: Vec<Operation> = [
        Operation::Payout(payout_op(SplitterId::new(0))),
        Operation::Create(create_op(alice_and_bob(), 0)),
        Operation::Payout(payout_op(SplitterId::new(0))),
    ]
    .into_iter()
    .map(|op| op.with_required_fee(schedule).unwrap())
    .collect();

    let results = OperationEvaluator::new(&ledger, &params).apply_all(&ops);

    assert!(matches!(results[0], Err(SplitterError::NotFound(_))));
    assert!(results[1].is_ok());
    assert!(results[2].is_ok());
}

#[test]
fn summary_reports_undistributed_funds() {
    let ledger = ledger();
    funded(&ledger, alice_and_bob(), 30);
    funded(&ledger, alice_and_bob(), 12);
    SplitterRegistry::new(&ledger)
        .create(&create_op(alice_and_bob(), 0))
        .unwrap();

    let summary = ledger.summary().unwrap();
    assert_eq!(summary.splitters, 3);
    assert_eq!(summary.held.get(&USD), Some(&42));
}
