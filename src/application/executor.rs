use crate::domain::calendar::CalendarDate;
use crate::domain::transaction::{ExecutionResult, ExecutionStatus, ValidatedTransaction};

/// Simulates a validated transfer against the snapshot.
///
/// Never fails: validation has already established feasibility. A transfer
/// scheduled strictly after `today` is left pending with both balances
/// untouched; anything else settles immediately. `today` is supplied by the
/// engine (one UTC read per call) so scheduling stays deterministic under
/// test.
pub fn execute(tx: &ValidatedTransaction<'_>, today: CalendarDate) -> ExecutionResult {
    let due_now = tx.execute_by.is_none_or(|date| date <= today);
    if due_now {
        tracing::info!(amount = tx.amount, currency = %tx.currency, "transfer executed");
        ExecutionResult {
            status: ExecutionStatus::Successful,
            debit: tx.debit.apply(-tx.amount),
            credit: tx.credit.apply(tx.amount),
        }
    } else {
        ExecutionResult {
            status: ExecutionStatus::Pending,
            debit: tx.debit.unchanged(),
            credit: tx.credit.unchanged(),
        }
    }
}
