use serde::Serialize;
use std::fmt;

/// Direction keyword that leads an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstructionType {
    Debit,
    Credit,
}

impl fmt::Display for InstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstructionType::Debit => f.write_str("DEBIT"),
            InstructionType::Credit => f.write_str("CREDIT"),
        }
    }
}

/// The structural fields of a well-formed instruction, straight off the
/// token stream.
///
/// `amount_raw` is deliberately the original token: turning it into a number
/// is a validation concern, not a parsing one. `currency` is already
/// uppercased because the grammar treats it case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction {
    pub instruction_type: InstructionType,
    pub amount_raw: String,
    pub currency: String,
    pub debit_account: String,
    pub credit_account: String,
    pub execute_by: Option<String>,
}
