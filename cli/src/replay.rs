//! Replay a batch of operations against an in-memory ledger.

use crate::config::CliConfig;
use paysplit_engine::{AppliedOperation, OperationEvaluator, SplitterError};
use paysplit_nullables::NullLedger;
use paysplit_operations::{Operation, OperationError};
use paysplit_types::FeeSchedule;
use serde::Serialize;
use std::path::Path;

/// Line-per-operation output record.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReplayRecord {
    Applied {
        index: usize,
        op: &'static str,
        #[serde(flatten)]
        applied: AppliedOperation,
    },
    Rejected {
        index: usize,
        op: &'static str,
        error: String,
    },
}

/// Read a JSON array of operations.
pub fn load_operations(path: &Path) -> anyhow::Result<Vec<Operation>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
    let ops: Vec<Operation> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid operations in {}: {e}", path.display()))?;
    Ok(ops)
}

/// Replace every operation's fee with the amount the schedule requires.
pub fn fill_fees(ops: Vec<Operation>, schedule: &FeeSchedule) -> Result<Vec<Operation>, OperationError> {
    ops.into_iter()
        .map(|op| op.with_required_fee(schedule))
        .collect()
}

/// Ledger holding the configured genesis accounts.
pub fn genesis_ledger(config: &CliConfig) -> NullLedger {
    let ledger = NullLedger::new();
    for account in &config.accounts {
        ledger.accounts.open(account.id);
        for balance in &account.balances {
            ledger.accounts.set_balance(account.id, *balance);
        }
    }
    tracing::debug!(accounts = config.accounts.len(), "genesis ledger ready");
    ledger
}

/// Apply `ops` in order and describe each outcome.
pub fn replay(ledger: &NullLedger, config: &CliConfig, ops: &[Operation]) -> Vec<ReplayRecord> {
    let evaluator = OperationEvaluator::new(ledger, &config.params);
    ops.iter()
        .zip(evaluator.apply_all(ops))
        .enumerate()
        .map(|(index, (op, result))| record(index, op, result))
        .collect()
}

fn record(
    index: usize,
    op: &Operation,
    result: Result<AppliedOperation, SplitterError>,
) -> ReplayRecord {
    match result {
        Ok(applied) => ReplayRecord::Applied {
            index,
            op: op.name(),
            applied,
        },
        Err(e) => ReplayRecord::Rejected {
            index,
            op: op.name(),
            error: e.to_string(),
        },
    }
}
