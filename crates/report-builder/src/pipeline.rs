use screener_core::{EsgOverride, MarketDataSource};
use tracing::{debug, info, warn};

use crate::merge::merge_overrides;
use crate::record::TickerMetrics;
use crate::row::{build_row, error_row, ReportRow};

/// Sequential per-ticker report pipeline: fetch, compute, merge manual
/// overrides, classify, format.
///
/// The pipeline holds no shared mutable state; tickers are independent and
/// a caller that wants parallelism can shard the ticker list across its own
/// pipelines.
pub struct ScreenerPipeline<S> {
    source: S,
}

impl<S: MarketDataSource> ScreenerPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Process every ticker in order into display-ready rows.
    ///
    /// A failed fetch becomes an error row in place; the remaining tickers
    /// are still processed.
    pub fn run(&self, tickers: &[String], overrides: &[EsgOverride]) -> Vec<ReportRow> {
        info!("Building report for {} tickers", tickers.len());
        let mut rows = Vec::with_capacity(tickers.len());

        for ticker in tickers {
            match self.source.fetch(ticker) {
                Ok(data) => {
                    let metrics = TickerMetrics::compute(&data);
                    let merged = merge_overrides(vec![metrics], overrides);
                    debug!("Processed {} ({} row(s))", ticker, merged.len());
                    rows.extend(merged.iter().map(build_row));
                }
                Err(err) => {
                    warn!("Error fetching {}: {}", ticker, err);
                    rows.push(error_row(ticker, &err));
                }
            }
        }

        info!("Report complete: {} rows", rows.len());
        rows
    }
}
