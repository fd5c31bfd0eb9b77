use super::account::Account;
use serde::Deserialize;

/// The already shape-validated payload the surrounding service hands over.
///
/// Upstream schema validation guarantees `instruction` is a string and
/// `accounts` is a list of `{id, balance, currency}` records; everything
/// inside those shapes (bad dates, unknown currencies, garbage amounts) is
/// the engine's problem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferRequest {
    pub instruction: String,
    pub accounts: Vec<Account>,
}
