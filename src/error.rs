use crate::domain::instruction::InstructionType;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors raised at the process boundary (I/O, JSON decoding).
///
/// Domain failures never surface here: a malformed instruction or an
/// unfunded account produces a `failed` response carrying a status code,
/// not an `Err`.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The stable status code taxonomy carried by every response.
///
/// Callers key behavior off these codes, so both the set and the mapping
/// from check to code are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusCode {
    /// Missing leading DEBIT/CREDIT keyword.
    SY01,
    /// Keyword out of expected position.
    SY02,
    /// Structurally malformed (empty, too short, truncated form).
    SY03,
    /// Amount not a positive integer.
    AM01,
    /// Currency mismatch between the accounts or against the instruction.
    CU01,
    /// Unsupported currency code.
    CU02,
    /// Insufficient funds on the debit account.
    AC01,
    /// Debit and credit account identical.
    AC02,
    /// Referenced account not found in the snapshot.
    AC03,
    /// Malformed account identifier.
    AC04,
    /// Invalid or incomplete execution date.
    DT01,
    /// Executed successfully, now or because the scheduled date has passed.
    AP00,
    /// Scheduled for future execution.
    AP02,
}

impl StatusCode {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCode::SY01 => "SY01",
            StatusCode::SY02 => "SY02",
            StatusCode::SY03 => "SY03",
            StatusCode::AM01 => "AM01",
            StatusCode::CU01 => "CU01",
            StatusCode::CU02 => "CU02",
            StatusCode::AC01 => "AC01",
            StatusCode::AC02 => "AC02",
            StatusCode::AC03 => "AC03",
            StatusCode::AC04 => "AC04",
            StatusCode::DT01 => "DT01",
            StatusCode::AP00 => "AP00",
            StatusCode::AP02 => "AP02",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the transfer an account identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Debit,
    Credit,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Debit => f.write_str("debit"),
            AccountRole::Credit => f.write_str("credit"),
        }
    }
}

/// A rejected instruction, one variant per taxonomy class.
///
/// The `Display` rendering is the `status_reason` reported to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstructionError {
    #[error("Missing required keyword DEBIT or CREDIT at start")]
    MissingVerb,

    #[error("Invalid keyword order for {form} format")]
    KeywordOrder { form: InstructionType },

    #[error("Malformed instruction: {reason}")]
    Malformed { reason: &'static str },

    /// The leading keyword matched but the form is cut off before the
    /// destination account.
    #[error("Malformed {form} instruction")]
    TruncatedForm { form: InstructionType },

    #[error("Amount must be a positive integer")]
    InvalidAmount,

    #[error("Unsupported currency")]
    UnsupportedCurrency,

    #[error("Invalid account ID format for {role} account: {id}")]
    InvalidAccountId { role: AccountRole, id: String },

    #[error("Account not found: {id}")]
    AccountNotFound { id: String },

    #[error("Account currency mismatch")]
    AccountCurrencyMismatch,

    #[error("Instruction currency {instruction} does not match account currency {account}")]
    InstructionCurrencyMismatch { instruction: String, account: String },

    #[error("Debit and credit accounts cannot be the same")]
    SelfTransfer,

    #[error(
        "Insufficient funds in debit account: has {available} {currency}, needs {required} {currency}"
    )]
    InsufficientFunds {
        available: i64,
        required: i64,
        currency: String,
    },

    #[error("ON clause missing date")]
    IncompleteDateClause,

    #[error("Invalid date format")]
    InvalidDate,
}

impl InstructionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InstructionError::MissingVerb => StatusCode::SY01,
            InstructionError::KeywordOrder { .. } => StatusCode::SY02,
            InstructionError::Malformed { .. } | InstructionError::TruncatedForm { .. } => {
                StatusCode::SY03
            }
            InstructionError::InvalidAmount => StatusCode::AM01,
            InstructionError::UnsupportedCurrency => StatusCode::CU02,
            InstructionError::InvalidAccountId { .. } => StatusCode::AC04,
            InstructionError::AccountNotFound { .. } => StatusCode::AC03,
            InstructionError::AccountCurrencyMismatch
            | InstructionError::InstructionCurrencyMismatch { .. } => StatusCode::CU01,
            InstructionError::SelfTransfer => StatusCode::AC02,
            InstructionError::InsufficientFunds { .. } => StatusCode::AC01,
            InstructionError::IncompleteDateClause | InstructionError::InvalidDate => {
                StatusCode::DT01
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(InstructionError::MissingVerb.status_code(), StatusCode::SY01);
        assert_eq!(
            InstructionError::KeywordOrder {
                form: InstructionType::Debit
            }
            .status_code(),
            StatusCode::SY02
        );
        assert_eq!(
            InstructionError::Malformed { reason: "empty" }.status_code(),
            StatusCode::SY03
        );
        assert_eq!(InstructionError::InvalidAmount.status_code(), StatusCode::AM01);
        assert_eq!(
            InstructionError::AccountCurrencyMismatch.status_code(),
            StatusCode::CU01
        );
        assert_eq!(
            InstructionError::UnsupportedCurrency.status_code(),
            StatusCode::CU02
        );
        assert_eq!(InstructionError::SelfTransfer.status_code(), StatusCode::AC02);
        assert_eq!(
            InstructionError::IncompleteDateClause.status_code(),
            StatusCode::DT01
        );
    }

    #[test]
    fn test_insufficient_funds_reason_carries_both_amounts() {
        let error = InstructionError::InsufficientFunds {
            available: 50,
            required: 100,
            currency: "USD".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Insufficient funds in debit account: has 50 USD, needs 100 USD"
        );
    }

    #[test]
    fn test_account_id_reason_names_the_side() {
        let error = InstructionError::InvalidAccountId {
            role: AccountRole::Credit,
            id: "bad id".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid account ID format for credit account: bad id"
        );
    }

    #[test]
    fn test_status_code_serializes_as_bare_code() {
        let json = serde_json::to_string(&StatusCode::AP00).unwrap();
        assert_eq!(json, "\"AP00\"");
    }
}
