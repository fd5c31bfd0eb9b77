use super::account::AccountSnapshot;
use super::instruction::InstructionType;
use crate::error::StatusCode;
use serde::Serialize;

/// Overall disposition of a processed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Failed,
    Pending,
    Successful,
}

/// The externally visible result of one processed instruction.
///
/// Every failure mode is represented here as data; the surrounding service
/// forwards the record verbatim. Field names match the wire format, and
/// absent fields serialize as `null` rather than being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(rename = "type")]
    pub instruction_type: Option<InstructionType>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub debit_account: Option<String>,
    pub credit_account: Option<String>,
    pub execute_by: Option<String>,
    pub status: ResponseStatus,
    pub status_reason: String,
    pub status_code: StatusCode,
    pub accounts: Vec<AccountSnapshot>,
}
