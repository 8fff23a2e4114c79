//! Mock ledger
//!
//! Stands in for the accounts/ledger service. The data is embedded at compile time
//! and decoded on every call, so each render works on a fresh copy.

use crate::bank::{Account, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const LEDGER_JSON: &str = include_str!("../assets/fixtures/ledger.json");

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Malformed ledger fixture: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpend {
    pub month: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub label: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Accounts shown on the dashboard
    pub accounts: Vec<Account>,
    /// Accounts a transfer can be made from or to
    pub transfer_accounts: Vec<Account>,
    pub recent_transactions: Vec<Transaction>,
    pub monthly_spending: Vec<MonthlySpend>,
    pub balance_history: Vec<BalancePoint>,
}

impl Ledger {
    pub fn parse(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes the embedded ledger
    pub fn load() -> Result<Self, FixtureError> {
        Self::parse(LEDGER_JSON)
    }

    /// Embedded ledger, or an empty one when it cannot be decoded
    pub fn load_or_empty() -> Self {
        match Self::load() {
            Ok(ledger) => ledger,
            Err(e) => {
                log::error!("{}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{AccountKind, TransactionStatus, total_balance};

    #[test]
    fn test_embedded_ledger_decodes() {
        let ledger = Ledger::load().unwrap();
        assert_eq!(ledger.accounts.len(), 3);
        assert_eq!(ledger.transfer_accounts.len(), 3);
        assert_eq!(ledger.recent_transactions.len(), 4);
        assert_eq!(ledger.monthly_spending.len(), 7);
        assert_eq!(ledger.balance_history.len(), 7);
    }

    #[test]
    fn test_embedded_ledger_values() {
        let ledger = Ledger::load().unwrap();
        assert_eq!(ledger.accounts[2].kind, AccountKind::Credit);
        assert_eq!(total_balance(&ledger.accounts), Decimal::new(12500900, 2));
        assert_eq!(ledger.transfer_accounts[0].balance, Decimal::new(2459050, 2));
        assert_eq!(
            ledger.recent_transactions[3].status,
            TransactionStatus::Pending
        );
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = Ledger::parse("{\"accounts\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("Malformed ledger fixture"));
    }
}
