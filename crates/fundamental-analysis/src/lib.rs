//! Growth and ratio math over financial-statement snapshots.
//!
//! Statement line-item naming is not standardized across issuers and data
//! vendors, so every concept is looked up through a priority list of
//! accepted names. All computations are total: absent items and zero
//! denominators resolve to `None`, never to an error.

use screener_core::FinancialSnapshot;
use serde::{Deserialize, Serialize};

/// Accepted names per line-item concept, in priority order
pub const REVENUE_LINE_ITEMS: &[&str] = &[
    "Total Revenue",
    "Revenue",
    "Operating Revenue",
    "Sales Revenue",
];
pub const EARNINGS_LINE_ITEMS: &[&str] = &[
    "Net Income",
    "Net Income Common Stockholders",
    "Net Income Continuous Operations",
];
pub const OPERATING_INCOME_LINE_ITEMS: &[&str] = &["Operating Income", "EBIT"];
pub const EQUITY_LINE_ITEMS: &[&str] = &[
    "Total Equity",
    "Total Stockholder Equity",
    "Stockholders Equity",
];
pub const GROSS_PROFIT_LINE_ITEMS: &[&str] = &["Gross Profit"];
pub const TOTAL_CASH_LINE_ITEMS: &[&str] = &["Total Cash"];
pub const TOTAL_DEBT_LINE_ITEMS: &[&str] = &["Total Debt"];
pub const FREE_CASH_FLOW_LINE_ITEMS: &[&str] = &["Free Cash Flow"];
pub const OPERATING_CASH_FLOW_LINE_ITEMS: &[&str] = &["Operating Cash Flow"];

/// Value under the first accepted name present in the snapshot
pub fn resolve_line_item(snapshot: &FinancialSnapshot, synonyms: &[&str]) -> Option<f64> {
    synonyms.iter().find_map(|name| snapshot.item(name))
}

/// Period-over-period growth: (current - previous) / previous.
///
/// `None` when either operand is absent or the base period is zero; total
/// over its whole input domain.
pub fn period_growth(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(current), Some(previous)) if previous != 0.0 => {
            Some((current - previous) / previous)
        }
        _ => None,
    }
}

/// Growth of one line item across the two most recent snapshots
pub fn snapshot_growth(snapshots: &[FinancialSnapshot], synonyms: &[&str]) -> Option<f64> {
    if snapshots.len() < 2 {
        return None;
    }
    let current = resolve_line_item(&snapshots[0], synonyms);
    let previous = resolve_line_item(&snapshots[1], synonyms);
    period_growth(current, previous)
}

/// Period-over-period growth rates, annual (YoY) and quarterly (QoQ)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub revenue_yoy: Option<f64>,
    pub earnings_yoy: Option<f64>,
    pub revenue_qoq: Option<f64>,
    pub earnings_qoq: Option<f64>,
}

impl GrowthSummary {
    pub fn compute(annual: &[FinancialSnapshot], quarterly: &[FinancialSnapshot]) -> Self {
        Self {
            revenue_yoy: snapshot_growth(annual, REVENUE_LINE_ITEMS),
            earnings_yoy: snapshot_growth(annual, EARNINGS_LINE_ITEMS),
            revenue_qoq: snapshot_growth(quarterly, REVENUE_LINE_ITEMS),
            earnings_qoq: snapshot_growth(quarterly, EARNINGS_LINE_ITEMS),
        }
    }
}

/// Statement line items from the most recent annual snapshot, as surfaced
/// on the report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementHighlights {
    pub gross_profit: Option<f64>,
    pub operating_income: Option<f64>,
    pub net_income: Option<f64>,
    pub total_cash: Option<f64>,
    pub total_debt: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub operating_cash_flow: Option<f64>,
}

impl StatementHighlights {
    pub fn compute(annual: &[FinancialSnapshot]) -> Self {
        let Some(latest) = annual.first() else {
            return Self::default();
        };

        let total_debt = resolve_line_item(latest, TOTAL_DEBT_LINE_ITEMS);
        let equity = resolve_line_item(latest, EQUITY_LINE_ITEMS);

        Self {
            gross_profit: resolve_line_item(latest, GROSS_PROFIT_LINE_ITEMS),
            operating_income: resolve_line_item(latest, OPERATING_INCOME_LINE_ITEMS),
            net_income: resolve_line_item(latest, EARNINGS_LINE_ITEMS),
            total_cash: resolve_line_item(latest, TOTAL_CASH_LINE_ITEMS),
            total_debt,
            debt_to_equity: debt_to_equity(total_debt, equity),
            free_cash_flow: resolve_line_item(latest, FREE_CASH_FLOW_LINE_ITEMS),
            operating_cash_flow: resolve_line_item(latest, OPERATING_CASH_FLOW_LINE_ITEMS),
        }
    }
}

/// Debt-to-equity ratio; `None` on absent operands or zero equity
pub fn debt_to_equity(total_debt: Option<f64>, equity: Option<f64>) -> Option<f64> {
    match (total_debt, equity) {
        (Some(debt), Some(equity)) if equity != 0.0 => Some(debt / equity),
        _ => None,
    }
}

/// Upside to the mean analyst target as a decimal fraction of the current
/// price; `None` when either side is absent or the price is not positive.
pub fn upside_fraction(current_price: Option<f64>, target_mean: Option<f64>) -> Option<f64> {
    match (current_price, target_mean) {
        (Some(price), Some(target)) if price > 0.0 => Some((target - price) / price),
        _ => None,
    }
}
