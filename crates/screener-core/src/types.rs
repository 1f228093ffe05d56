use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One daily closing observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Project an ordered price history onto its closing prices
pub fn closes(history: &[PricePoint]) -> Vec<f64> {
    history.iter().map(|p| p.close).collect()
}

/// Statement line items for one reporting period, keyed by the names the
/// vendor publishes them under. Snapshot sequences are ordered
/// most-recent-first: index 0 is the latest period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Period identifier, e.g. "2025-Q2" or "FY2024"
    pub period: String,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    pub items: HashMap<String, f64>,
}

impl FinancialSnapshot {
    pub fn item(&self, name: &str) -> Option<f64> {
        self.items.get(name).copied()
    }
}

/// Point-in-time quote-level fields for a ticker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub current_price: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub dividend_yield: Option<f64>,
    /// Vendor-supplied growth rates; preferred over statement math when present
    pub earnings_growth: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub earnings_quarterly_growth: Option<f64>,
    pub revenue_quarterly_growth: Option<f64>,
}

/// Analyst rating breakdown and price targets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalystSummary {
    pub strong_buy: Option<i64>,
    pub buy: Option<i64>,
    pub hold: Option<i64>,
    pub sell: Option<i64>,
    pub strong_sell: Option<i64>,
    pub target_mean: Option<f64>,
    pub target_high: Option<f64>,
    pub target_low: Option<f64>,
}

impl AnalystSummary {
    /// Total analysts across the rating breakdown; None when no breakdown exists
    pub fn total_analysts(&self) -> Option<i64> {
        let counts = [
            self.strong_buy,
            self.buy,
            self.hold,
            self.sell,
            self.strong_sell,
        ];
        if counts.iter().all(Option::is_none) {
            return None;
        }
        Some(counts.iter().map(|c| c.unwrap_or(0)).sum())
    }
}

/// Vendor sustainability scores
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EsgScores {
    pub total: Option<f64>,
    pub environment: Option<f64>,
    pub social: Option<f64>,
    pub governance: Option<f64>,
    pub percentile: Option<f64>,
}

/// One manually maintained ESG assessment row. A ticker may carry several,
/// one per theme; the merge step stacks them into ticker x theme rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EsgOverride {
    pub ticker: String,
    pub theme: Option<String>,
    pub score: Option<f64>,
    pub confidence: Option<String>,
    pub criteria: Option<String>,
    pub review_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Everything a data source supplies for one ticker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerData {
    pub ticker: String,
    pub history: Vec<PricePoint>,
    pub quote: QuoteSummary,
    /// Annual statement snapshots, most recent first
    pub annual: Vec<FinancialSnapshot>,
    /// Quarterly statement snapshots, most recent first
    pub quarterly: Vec<FinancialSnapshot>,
    pub analyst: AnalystSummary,
    pub esg: EsgScores,
}
