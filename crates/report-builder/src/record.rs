use fundamental_analysis::{upside_fraction, GrowthSummary, StatementHighlights};
use screener_core::{AnalystSummary, EsgScores, TickerData};
use serde::{Deserialize, Serialize};
use technical_analysis::TechnicalSnapshot;

/// Raw per-ticker metric set, before any formatting.
///
/// Every numeric field is a tagged optional; nothing here is display-ready
/// yet. One of these is produced per fetched ticker and carried through the
/// override merge so classifiers can run on raw values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerMetrics {
    pub ticker: String,
    pub current_price: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub statements: StatementHighlights,
    pub growth: GrowthSummary,
    pub technicals: TechnicalSnapshot,
    pub analyst: AnalystSummary,
    /// Upside to the mean analyst target, as a decimal fraction
    pub upside: Option<f64>,
    pub esg: EsgScores,
}

impl TickerMetrics {
    /// One pass over a fetched bundle: statement extraction, growth rates,
    /// technical indicators, and analyst upside.
    pub fn compute(data: &TickerData) -> Self {
        let quote = &data.quote;
        let computed = GrowthSummary::compute(&data.annual, &data.quarterly);

        // Annual growth prefers the vendor's figures with statement math as
        // the fallback; quarterly is the reverse. Option::or keeps a
        // legitimate vendor 0.0 instead of treating it as missing.
        let growth = GrowthSummary {
            revenue_yoy: quote.revenue_growth.or(computed.revenue_yoy),
            earnings_yoy: quote.earnings_growth.or(computed.earnings_yoy),
            revenue_qoq: computed.revenue_qoq.or(quote.revenue_quarterly_growth),
            earnings_qoq: computed.earnings_qoq.or(quote.earnings_quarterly_growth),
        };

        Self {
            ticker: data.ticker.clone(),
            current_price: quote.current_price,
            pe_ratio: quote.pe_ratio,
            market_cap: quote.market_cap,
            dividend_yield: quote.dividend_yield,
            statements: StatementHighlights::compute(&data.annual),
            growth,
            technicals: TechnicalSnapshot::compute(&data.history),
            analyst: data.analyst.clone(),
            upside: upside_fraction(quote.current_price, data.analyst.target_mean),
            esg: data.esg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::{FinancialSnapshot, PricePoint, QuoteSummary};

    fn snapshot(period: &str, items: &[(&str, f64)]) -> FinancialSnapshot {
        FinancialSnapshot {
            period: period.to_string(),
            period_end: None,
            items: items.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn history(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint {
                date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(i as u64))
                    .unwrap(),
                close: *close,
            })
            .collect()
    }

    #[test]
    fn test_compute_wires_growth_and_upside() {
        let data = TickerData {
            ticker: "ACME".to_string(),
            history: history(&[100.0, 101.0, 100.0]),
            quote: QuoteSummary {
                current_price: Some(100.0),
                revenue_growth: Some(0.25),
                ..Default::default()
            },
            annual: vec![
                snapshot("FY2024", &[("Total Revenue", 1100.0)]),
                snapshot("FY2023", &[("Total Revenue", 1000.0)]),
            ],
            quarterly: vec![],
            analyst: AnalystSummary {
                target_mean: Some(112.0),
                ..Default::default()
            },
            esg: EsgScores::default(),
        };

        let metrics = TickerMetrics::compute(&data);
        // Vendor annual growth wins over the computed 0.10
        assert_eq!(metrics.growth.revenue_yoy, Some(0.25));
        assert!((metrics.upside.unwrap() - 0.12).abs() < 1e-12);
        // Three closes cannot fill any indicator window except MACD
        assert_eq!(metrics.technicals.rsi_14, None);
        assert!(metrics.technicals.macd.is_some());
    }

    #[test]
    fn test_compute_vendor_zero_growth_is_kept() {
        let data = TickerData {
            ticker: "ACME".to_string(),
            quote: QuoteSummary {
                earnings_growth: Some(0.0),
                ..Default::default()
            },
            annual: vec![
                snapshot("FY2024", &[("Net Income", 120.0)]),
                snapshot("FY2023", &[("Net Income", 100.0)]),
            ],
            ..Default::default()
        };

        let metrics = TickerMetrics::compute(&data);
        assert_eq!(metrics.growth.earnings_yoy, Some(0.0));
    }

    #[test]
    fn test_compute_quarterly_prefers_statement_math() {
        let data = TickerData {
            ticker: "ACME".to_string(),
            quote: QuoteSummary {
                revenue_quarterly_growth: Some(0.5),
                ..Default::default()
            },
            quarterly: vec![
                snapshot("2025-Q2", &[("Total Revenue", 330.0)]),
                snapshot("2025-Q1", &[("Total Revenue", 300.0)]),
            ],
            ..Default::default()
        };

        let metrics = TickerMetrics::compute(&data);
        assert!((metrics.growth.revenue_qoq.unwrap() - 0.1).abs() < 1e-12);
    }
}
