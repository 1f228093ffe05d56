use screener_core::CellValue;

/// Presentation rule for one report column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Numeric cell rounded to the given number of decimals
    Round(u32),
    /// "x.xxB" text; input in raw currency units
    Billions,
    /// "x.xx%" text; input as a decimal fraction
    Percent,
    /// Numeric cell unchanged
    PassThrough,
}

impl FormatRule {
    /// Format one cell.
    ///
    /// Idempotent on the sentinel and on already-formatted text: only
    /// numeric cells are transformed, so re-applying a rule to its own
    /// output returns the same cell.
    pub fn apply(self, value: CellValue) -> CellValue {
        let number = match value {
            CellValue::Number(v) => v,
            other => return other,
        };

        match self {
            FormatRule::Round(decimals) => CellValue::Number(round_to(number, decimals)),
            FormatRule::Billions => CellValue::Text(format!("{:.2}B", number / 1e9)),
            FormatRule::Percent => CellValue::Text(format!("{:.2}%", number * 100.0)),
            FormatRule::PassThrough => CellValue::Number(number),
        }
    }

    /// Format a raw optional, folding absence and NaN into the sentinel first
    pub fn apply_raw(self, value: Option<f64>) -> CellValue {
        self.apply(CellValue::from_raw(value))
    }
}

/// Presentation rule per report column. Columns not listed (ticker, text
/// fields, analyst counts, categorical labels) pass through unchanged.
pub const COLUMN_RULES: &[(&str, FormatRule)] = &[
    ("Current Price", FormatRule::Round(2)),
    ("PE Ratio", FormatRule::Round(2)),
    ("Market Cap", FormatRule::Billions),
    ("Dividend Yield", FormatRule::Round(4)),
    ("Gross Profit", FormatRule::Billions),
    ("Operating Income", FormatRule::Billions),
    ("Net Income", FormatRule::Billions),
    ("Total Cash", FormatRule::Billions),
    ("Total Debt", FormatRule::Billions),
    ("Debt to Equity", FormatRule::Round(2)),
    ("Free Cash Flow", FormatRule::Billions),
    ("Operating Cash Flow", FormatRule::Billions),
    ("Earnings Growth YoY", FormatRule::Percent),
    ("Revenue Growth YoY", FormatRule::Percent),
    ("Earnings QoQ Growth", FormatRule::Percent),
    ("Revenue QoQ Growth", FormatRule::Percent),
    ("RSI (14)", FormatRule::Round(2)),
    ("SMA 20", FormatRule::Round(2)),
    ("SMA 50", FormatRule::Round(2)),
    ("SMA 200", FormatRule::Round(2)),
    ("MACD", FormatRule::Round(2)),
    ("Signal Line", FormatRule::Round(2)),
    ("Target Mean", FormatRule::Round(2)),
    ("Target High", FormatRule::Round(2)),
    ("Target Low", FormatRule::Round(2)),
    ("Upside %", FormatRule::Percent),
    ("ESG Total Score", FormatRule::Round(2)),
    ("ESG Environment", FormatRule::Round(2)),
    ("ESG Social", FormatRule::Round(2)),
    ("ESG Governance", FormatRule::Round(2)),
    ("ESG Percentile", FormatRule::Round(2)),
    ("Manual ESG Score", FormatRule::Round(2)),
];

/// Rule for a column, defaulting to pass-through for unlisted columns
pub fn rule_for(column: &str) -> FormatRule {
    COLUMN_RULES
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, rule)| *rule)
        .unwrap_or(FormatRule::PassThrough)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_rule() {
        assert_eq!(
            FormatRule::Round(2).apply_raw(Some(3.14159)),
            CellValue::Number(3.14)
        );
        assert_eq!(
            FormatRule::Round(4).apply_raw(Some(0.00456789)),
            CellValue::Number(0.0046)
        );
    }

    #[test]
    fn test_billions_rule() {
        assert_eq!(
            FormatRule::Billions.apply_raw(Some(2_500_000_000.0)),
            CellValue::text("2.50B")
        );
        assert_eq!(
            FormatRule::Billions.apply_raw(Some(123_456_000_000.0)),
            CellValue::text("123.46B")
        );
    }

    #[test]
    fn test_percent_rule_takes_fractions() {
        assert_eq!(
            FormatRule::Percent.apply_raw(Some(0.0616)),
            CellValue::text("6.16%")
        );
        assert_eq!(
            FormatRule::Percent.apply_raw(Some(-0.05)),
            CellValue::text("-5.00%")
        );
    }

    #[test]
    fn test_absent_and_nan_become_sentinel() {
        assert_eq!(FormatRule::Round(2).apply_raw(None), CellValue::Unavailable);
        assert_eq!(
            FormatRule::Percent.apply_raw(Some(f64::NAN)),
            CellValue::Unavailable
        );
    }

    #[test]
    fn test_sentinel_is_idempotent() {
        let once = FormatRule::Billions.apply(CellValue::Unavailable);
        let twice = FormatRule::Billions.apply(once.clone());
        assert_eq!(once, CellValue::Unavailable);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_formatted_text_is_idempotent() {
        let once = FormatRule::Percent.apply_raw(Some(0.10));
        let twice = FormatRule::Percent.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rule_lookup() {
        assert_eq!(rule_for("Market Cap"), FormatRule::Billions);
        assert_eq!(rule_for("Upside %"), FormatRule::Percent);
        assert_eq!(rule_for("Ticker"), FormatRule::PassThrough);
        assert_eq!(rule_for("Strong Buy"), FormatRule::PassThrough);
    }
}
