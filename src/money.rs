//! Currency handling for the portal
//!
//! Amounts are carried as [`Decimal`] everywhere and only turned into text at the
//! edge, through [`format_currency`] or a [`BalanceVisibility`] that may mask them.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of bullets used when a headline balance is hidden
pub const BALANCE_MASK_LEN: usize = 8;

/// Currencies a customer can send or hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

impl Currency {
    /// Order used by the currency picker
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Cad];

    /// ISO 4217 code
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "CA$",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Formats an amount the way a US locale would: `-$2,450.75`
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!(
        "{sign}{}{}.{cents}",
        currency.symbol(),
        group_thousands(whole)
    )
}

fn group_thousands(whole: &str) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whether balances are currently shown or masked on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BalanceVisibility {
    #[default]
    Shown,
    Hidden,
}

impl BalanceVisibility {
    pub fn toggle(&mut self) {
        *self = match self {
            BalanceVisibility::Shown => BalanceVisibility::Hidden,
            BalanceVisibility::Hidden => BalanceVisibility::Shown,
        };
    }

    pub fn is_shown(self) -> bool {
        self == BalanceVisibility::Shown
    }

    /// Label for the button that flips the current state
    pub fn toggle_label(self) -> &'static str {
        match self {
            BalanceVisibility::Shown => "Hide",
            BalanceVisibility::Hidden => "Show",
        }
    }

    pub fn display(self, amount: Decimal, currency: Currency) -> String {
        self.display_masked(amount, currency, BALANCE_MASK_LEN)
    }

    /// Formatted amount, or `dots` bullets when hidden
    pub fn display_masked(self, amount: Decimal, currency: Currency, dots: usize) -> String {
        match self {
            BalanceVisibility::Shown => format_currency(amount, currency),
            BalanceVisibility::Hidden => "•".repeat(dots),
        }
    }
}
