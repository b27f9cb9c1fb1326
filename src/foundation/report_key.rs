//! ReportKey enum identifying the report families that carry an advisory panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// The report families the application renders advisory panels on.
///
/// Each key selects one fixed criteria/weight table and candidate catalog.
/// Callers holding a route string parse it with [`ReportKey::from_str`];
/// unknown strings are a configuration error, never a silent empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKey {
    AccountBalance,
    ClosingBalance,
    TrialBalance,
    CashLedger,
}

impl ReportKey {
    /// Returns all report keys in canonical order.
    pub fn all() -> &'static [ReportKey] {
        &[
            ReportKey::AccountBalance,
            ReportKey::ClosingBalance,
            ReportKey::TrialBalance,
            ReportKey::CashLedger,
        ]
    }

    /// Returns the canonical wire/key form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKey::AccountBalance => "account-balance",
            ReportKey::ClosingBalance => "closing-balance",
            ReportKey::TrialBalance => "trial-balance",
            ReportKey::CashLedger => "cash-ledger",
        }
    }

    /// Returns the display name used in page headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKey::AccountBalance => "Account Balances",
            ReportKey::ClosingBalance => "Closing Balance Sheet",
            ReportKey::TrialBalance => "Trial Balance",
            ReportKey::CashLedger => "Cash Ledger",
        }
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKey::all()
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| ConfigError::unknown_report(s))
    }
}
