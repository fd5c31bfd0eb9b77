use crate::domain::account::{Account, AccountSnapshot};
use crate::domain::instruction::ParsedInstruction;
use crate::domain::response::{Response, ResponseStatus};
use crate::domain::transaction::{ExecutionResult, ExecutionStatus, ValidatedTransaction};
use crate::error::InstructionError;

/// Builds the failure-shaped response.
///
/// Echoes whatever the parser managed to extract; when the parse itself
/// failed there is nothing to echo and every field is null. The displayed
/// amount is a best-effort read of the raw token, since the validator never
/// resolved one.
pub fn failure(parsed: Option<&ParsedInstruction>, error: &InstructionError) -> Response {
    Response {
        instruction_type: parsed.map(|p| p.instruction_type),
        amount: parsed.and_then(|p| integer_prefix(&p.amount_raw)),
        currency: parsed.map(|p| p.currency.clone()),
        debit_account: parsed.map(|p| p.debit_account.clone()),
        credit_account: parsed.map(|p| p.credit_account.clone()),
        execute_by: parsed.and_then(|p| p.execute_by.clone()),
        status: ResponseStatus::Failed,
        status_reason: error.to_string(),
        status_code: error.status_code(),
        accounts: Vec::new(),
    }
}

/// Builds the success or pending response from the validated transaction,
/// so every echoed field carries the normalized value rather than the raw
/// token.
pub fn success(
    validated: &ValidatedTransaction<'_>,
    executed: &ExecutionResult,
    original: &[Account],
) -> Response {
    let (status, status_reason) = match executed.status {
        ExecutionStatus::Successful => (
            ResponseStatus::Successful,
            "Transaction executed successfully",
        ),
        ExecutionStatus::Pending => (
            ResponseStatus::Pending,
            "Transaction scheduled for future execution",
        ),
    };

    Response {
        instruction_type: Some(validated.instruction_type),
        amount: Some(validated.amount),
        currency: Some(validated.currency.clone()),
        debit_account: Some(validated.debit.id.clone()),
        credit_account: Some(validated.credit.id.clone()),
        execute_by: validated.execute_by.map(|date| date.to_string()),
        status,
        status_reason: status_reason.to_string(),
        status_code: executed.status.status_code(),
        accounts: in_caller_order(executed, original),
    }
}

/// The two touched accounts, in the caller's original relative order.
fn in_caller_order(executed: &ExecutionResult, original: &[Account]) -> Vec<AccountSnapshot> {
    let mut ordered: Vec<AccountSnapshot> = original
        .iter()
        .filter_map(|account| {
            if account.id == executed.debit.id {
                Some(executed.debit.clone())
            } else if account.id == executed.credit.id {
                Some(executed.credit.clone())
            } else {
                None
            }
        })
        .collect();
    // Validation guarantees both ids came from the snapshot; if the list
    // disagrees anyway, fall back to debit-then-credit.
    if ordered.len() != 2 {
        ordered = vec![executed.debit.clone(), executed.credit.clone()];
    }
    ordered
}

/// Best-effort read of a raw amount token: the longest leading integer
/// prefix, with zero treated as absent.
fn integer_prefix(raw: &str) -> Option<i64> {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end]
        .parse::<i64>()
        .ok()
        .map(|n| sign * n)
        .filter(|&n| n != 0)
}
