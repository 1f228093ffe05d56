use crate::{ScreenerError, TickerData};

/// Seam to whatever vendor supplies per-ticker market, statement, and ESG
/// data. Implementations live outside this workspace; the report pipeline
/// only needs the fetched bundle, and degrades a per-ticker failure into an
/// error row instead of aborting the run.
pub trait MarketDataSource: Send + Sync {
    fn fetch(&self, ticker: &str) -> Result<TickerData, ScreenerError>;
}
