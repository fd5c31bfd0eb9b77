use super::account::{Account, AccountSnapshot};
use super::calendar::CalendarDate;
use super::instruction::InstructionType;
use crate::error::StatusCode;
use serde::Serialize;

/// A fully resolved transfer: every validation check has passed.
///
/// Holds references into the caller's snapshot rather than copies, so the
/// executor reads balances without the engine cloning the whole list. The
/// debit and credit ids are guaranteed distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransaction<'a> {
    pub instruction_type: InstructionType,
    pub amount: i64,
    pub currency: String,
    pub debit: &'a Account,
    pub credit: &'a Account,
    pub execute_by: Option<CalendarDate>,
}

/// Outcome of simulating a validated transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Successful,
    Pending,
}

impl ExecutionStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            ExecutionStatus::Successful => StatusCode::AP00,
            ExecutionStatus::Pending => StatusCode::AP02,
        }
    }
}

/// The simulated before/after pair for both involved accounts.
///
/// A pending result leaves `balance == balance_before` on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub debit: AccountSnapshot,
    pub credit: AccountSnapshot,
}
