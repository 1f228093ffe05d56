use screener_core::{closes, PricePoint};
use serde::{Deserialize, Serialize};

use crate::indicators::{last_defined, macd, rsi, sma};

/// Latest-value projection of the technical indicators for one ticker.
///
/// Each field degrades independently: an indicator whose window exceeds the
/// available history is simply `None`, while the MACD pair is defined from
/// the first observation onward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub rsi_14: Option<f64>,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
}

impl TechnicalSnapshot {
    pub fn compute(history: &[PricePoint]) -> Self {
        Self::from_closes(&closes(history))
    }

    pub fn from_closes(series: &[f64]) -> Self {
        let macd_series = macd(series, 12, 26, 9);

        Self {
            rsi_14: last_defined(&rsi(series, 14)),
            sma_20: last_defined(&sma(series, 20)),
            sma_50: last_defined(&sma(series, 50)),
            sma_200: last_defined(&sma(series, 200)),
            macd: macd_series.macd_line.last().copied(),
            macd_signal: macd_series.signal_line.last().copied(),
        }
    }
}
