//! Display-only banking data
//!
//! Accounts and transactions shown on the dashboard. Nothing here is mutated once
//! loaded; the ledger behind it is a fixture (see [`crate::fixtures`]).

use crate::money::Currency;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
}

impl AccountKind {
    /// CSS modifier for the card gradient
    pub fn css_class(self) -> &'static str {
        match self {
            AccountKind::Checking => "account-card checking",
            AccountKind::Savings => "account-card savings",
            AccountKind::Credit => "account-card credit",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AccountKind::Checking => "💳",
            AccountKind::Savings => "🏦",
            AccountKind::Credit => "💎",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AccountKind::Checking => "Everyday Banking",
            AccountKind::Savings => "High Yield Savings",
            AccountKind::Credit => "Platinum Credit",
        }
    }

    pub fn balance_label(self) -> &'static str {
        match self {
            AccountKind::Credit => "Available Credit",
            AccountKind::Checking | AccountKind::Savings => "Available Balance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTransaction {
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl LastTransaction {
    pub fn is_inflow(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub balance: Decimal,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub last_transaction: Option<LastTransaction>,
}

impl Account {
    /// Account id left-padded to four digits, as printed on the card
    pub fn masked_number(&self) -> String {
        format!("••••{:0>4}", self.id)
    }
}

/// Sum of every balance, liabilities included
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

/// Currency the accounts are held in: the first account's, USD when there are none
pub fn holding_currency(accounts: &[Account]) -> Currency {
    accounts.first().map(|a| a.currency).unwrap_or_default()
}

pub fn find_account<'a>(accounts: &'a [Account], id: &str) -> Option<&'a Account> {
    accounts.iter().find(|a| a.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn sign(self) -> &'static str {
        match self {
            TransactionKind::Credit => "+",
            TransactionKind::Debit => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "status-success",
            TransactionStatus::Pending => "status-warning",
            TransactionStatus::Failed => "status-error",
        }
    }
}

/// Spending category, normalised from the free-form label of the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Shopping,
    Mobile,
    Transport,
    Utilities,
    Income,
    Other,
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "shopping" => Category::Shopping,
            "mobile" | "phone" => Category::Mobile,
            "transport" | "gas" => Category::Transport,
            "utilities" | "rent" => Category::Utilities,
            "income" => Category::Income,
            _ => Category::Other,
        }
    }

    /// Icon for a transaction; uncategorised ones show their direction instead
    pub fn icon(self, kind: TransactionKind) -> &'static str {
        match (self, kind) {
            (Category::Shopping, _) => "🛍",
            (Category::Mobile, _) => "📱",
            (Category::Transport, _) => "🚗",
            (Category::Utilities, _) => "🏠",
            (Category::Income | Category::Other, TransactionKind::Credit) => "↙",
            (Category::Income | Category::Other, TransactionKind::Debit) => "↗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Currency,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    #[serde(default)]
    pub merchant: Option<String>,
}

impl Transaction {
    pub fn category(&self) -> Category {
        Category::from_label(&self.category)
    }

    /// Merchant when known, otherwise the raw category label
    pub fn counterparty(&self) -> &str {
        self.merchant.as_deref().unwrap_or(&self.category)
    }

    pub fn display_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }
}
