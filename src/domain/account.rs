use serde::{Deserialize, Serialize};

/// A single entry in the caller-supplied balance snapshot.
///
/// The snapshot is authoritative for exactly one call: nothing is persisted
/// between calls and the engine never mutates the caller's list in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub balance: i64,
    pub currency: String,
}

impl Account {
    /// Applies a signed balance delta, producing the post-simulation record.
    ///
    /// The original account is left untouched; the snapshot pair keeps the
    /// pre-call balance in `balance_before`.
    pub fn apply(&self, delta: i64) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id.clone(),
            balance: self.balance + delta,
            balance_before: self.balance,
            currency: self.currency.clone(),
        }
    }

    /// The before/after pair for an account a pending transfer leaves alone.
    pub fn unchanged(&self) -> AccountSnapshot {
        self.apply(0)
    }
}

/// Before/after view of one account involved in a simulated transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: String,
    pub balance: i64,
    pub balance_before: i64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: "A1".to_string(),
            balance: 500,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_apply_keeps_balance_before() {
        let snapshot = account().apply(-100);
        assert_eq!(snapshot.balance, 400);
        assert_eq!(snapshot.balance_before, 500);
        assert_eq!(snapshot.id, "A1");
    }

    #[test]
    fn test_apply_does_not_touch_the_source() {
        let source = account();
        let _ = source.apply(-100);
        assert_eq!(source.balance, 500);
    }

    #[test]
    fn test_unchanged_mirrors_the_balance() {
        let snapshot = account().unchanged();
        assert_eq!(snapshot.balance, snapshot.balance_before);
    }
}
