use screener_core::EsgOverride;

use crate::record::TickerMetrics;

/// One merged row: a ticker's metrics plus at most one manual override theme
#[derive(Debug, Clone)]
pub struct MergedRow {
    pub metrics: TickerMetrics,
    pub esg_override: Option<EsgOverride>,
}

/// Left join of metric rows against the manual override table on ticker.
///
/// Every metrics row survives: a ticker with N override themes yields N
/// rows, one per theme; a ticker without overrides yields a single row with
/// empty override fields. Fetched fields are never overwritten.
pub fn merge_overrides(metrics: Vec<TickerMetrics>, overrides: &[EsgOverride]) -> Vec<MergedRow> {
    let mut rows = Vec::with_capacity(metrics.len());

    for m in metrics {
        let matches: Vec<&EsgOverride> = overrides
            .iter()
            .filter(|o| o.ticker.trim().eq_ignore_ascii_case(m.ticker.trim()))
            .collect();

        if matches.is_empty() {
            rows.push(MergedRow {
                metrics: m,
                esg_override: None,
            });
            continue;
        }

        for o in matches {
            rows.push(MergedRow {
                metrics: m.clone(),
                esg_override: Some(o.clone()),
            });
        }
    }
    rows
}
