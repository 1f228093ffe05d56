use screener_core::{CellValue, ScreenerError};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::classify::{esg_category, rsi_status, upside_bucket};
use crate::format::rule_for;
use crate::merge::MergedRow;

/// Ordered column -> formatted value mapping for one output row.
///
/// Every field is a display-ready `CellValue`: missing data appears as the
/// uniform "N/A" sentinel, never as a raw optional or NaN.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub ticker: String,
    pub fields: Vec<(String, CellValue)>,
}

impl ReportRow {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Assemble one merged row's columns, classify the raw values, then run the
/// whole field set through the per-column formatting table.
pub fn build_row(row: &MergedRow) -> ReportRow {
    let m = &row.metrics;
    let o = row.esg_override.as_ref();

    let mut fields: Vec<(String, CellValue)> = Vec::with_capacity(48);
    let mut push = |name: &str, value: CellValue| fields.push((name.to_string(), value));

    push("Ticker", CellValue::text(&m.ticker));
    push("Current Price", CellValue::from_raw(m.current_price));

    // Valuation
    push("PE Ratio", CellValue::from_raw(m.pe_ratio));
    push("Market Cap", CellValue::from_raw(m.market_cap));
    push("Dividend Yield", CellValue::from_raw(m.dividend_yield));

    // Financial performance
    push("Gross Profit", CellValue::from_raw(m.statements.gross_profit));
    push(
        "Operating Income",
        CellValue::from_raw(m.statements.operating_income),
    );
    push("Net Income", CellValue::from_raw(m.statements.net_income));

    // Balance sheet
    push("Total Cash", CellValue::from_raw(m.statements.total_cash));
    push("Total Debt", CellValue::from_raw(m.statements.total_debt));
    push(
        "Debt to Equity",
        CellValue::from_raw(m.statements.debt_to_equity),
    );

    // Cash flow
    push(
        "Free Cash Flow",
        CellValue::from_raw(m.statements.free_cash_flow),
    );
    push(
        "Operating Cash Flow",
        CellValue::from_raw(m.statements.operating_cash_flow),
    );

    // Growth
    push(
        "Earnings Growth YoY",
        CellValue::from_raw(m.growth.earnings_yoy),
    );
    push(
        "Revenue Growth YoY",
        CellValue::from_raw(m.growth.revenue_yoy),
    );
    push(
        "Earnings QoQ Growth",
        CellValue::from_raw(m.growth.earnings_qoq),
    );
    push(
        "Revenue QoQ Growth",
        CellValue::from_raw(m.growth.revenue_qoq),
    );

    // Technicals
    push("RSI (14)", CellValue::from_raw(m.technicals.rsi_14));
    push("SMA 20", CellValue::from_raw(m.technicals.sma_20));
    push("SMA 50", CellValue::from_raw(m.technicals.sma_50));
    push("SMA 200", CellValue::from_raw(m.technicals.sma_200));
    push("MACD", CellValue::from_raw(m.technicals.macd));
    push("Signal Line", CellValue::from_raw(m.technicals.macd_signal));

    // Analyst estimates
    push("Strong Buy", CellValue::from_count(m.analyst.strong_buy));
    push("Buy", CellValue::from_count(m.analyst.buy));
    push("Hold", CellValue::from_count(m.analyst.hold));
    push("Sell", CellValue::from_count(m.analyst.sell));
    push("Strong Sell", CellValue::from_count(m.analyst.strong_sell));
    push(
        "Total Analysts (Breakdown)",
        CellValue::from_count(m.analyst.total_analysts()),
    );
    push("Target Mean", CellValue::from_raw(m.analyst.target_mean));
    push("Target High", CellValue::from_raw(m.analyst.target_high));
    push("Target Low", CellValue::from_raw(m.analyst.target_low));
    push("Upside %", CellValue::from_raw(m.upside));

    // ESG scores
    push("ESG Total Score", CellValue::from_raw(m.esg.total));
    push("ESG Environment", CellValue::from_raw(m.esg.environment));
    push("ESG Social", CellValue::from_raw(m.esg.social));
    push("ESG Governance", CellValue::from_raw(m.esg.governance));
    push("ESG Percentile", CellValue::from_raw(m.esg.percentile));

    // Manual override fields; empty for tickers with no override row
    push(
        "ESG Theme",
        CellValue::from_text(o.and_then(|v| v.theme.clone())),
    );
    push(
        "Manual ESG Score",
        CellValue::from_raw(o.and_then(|v| v.score)),
    );
    push(
        "Confidence Level",
        CellValue::from_text(o.and_then(|v| v.confidence.clone())),
    );
    push(
        "Assessment Criteria",
        CellValue::from_text(o.and_then(|v| v.criteria.clone())),
    );
    push(
        "Review Date",
        CellValue::from_text(
            o.and_then(|v| v.review_date)
                .map(|d| d.format("%Y-%m-%d").to_string()),
        ),
    );
    push(
        "Analyst Notes",
        CellValue::from_text(o.and_then(|v| v.notes.clone())),
    );

    // Buckets are classified on the raw values, not on display strings
    push(
        "Upside Bucket",
        CellValue::from_text(upside_bucket(m.upside).map(|b| b.label())),
    );
    push(
        "ESG Category",
        CellValue::from_text(esg_category(o.and_then(|v| v.score)).map(|c| c.label())),
    );
    push(
        "RSI Status",
        CellValue::from_text(rsi_status(m.technicals.rsi_14).map(|s| s.label())),
    );

    // Single table-driven formatting pass over every assembled field
    for (name, value) in fields.iter_mut() {
        *value = rule_for(name).apply(value.clone());
    }

    ReportRow {
        ticker: m.ticker.clone(),
        fields,
    }
}

/// Row recorded when a ticker's fetch fails; the rest of the run continues
pub fn error_row(ticker: &str, error: &ScreenerError) -> ReportRow {
    let message: String = error.to_string().chars().take(100).collect();

    ReportRow {
        ticker: ticker.to_string(),
        fields: vec![
            ("Ticker".to_string(), CellValue::text(ticker)),
            ("Current Price".to_string(), CellValue::text("Error")),
            ("Error Message".to_string(), CellValue::text(message)),
        ],
    }
}
