//! Indicator math over an ordered close-price series.
//!
//! Every function here is total: an empty series, or one shorter than an
//! indicator's window, yields undefined positions rather than an error.
//! SMA and RSI outputs are aligned to the input, with `None` marking
//! positions that lack a full trailing window.

/// Simple Moving Average: rolling arithmetic mean over `window` trailing
/// observations. The first `window - 1` positions are undefined.
pub fn sma(data: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; data.len()];
    if window == 0 || data.len() < window {
        return result;
    }

    for i in window - 1..data.len() {
        let sum: f64 = data[i + 1 - window..=i].iter().sum();
        result[i] = Some(sum / window as f64);
    }
    result
}

/// Exponential Moving Average with span semantics: alpha = 2 / (span + 1),
/// seeded with the first observation.
///
/// There is no warm-up cutoff: the output is defined from the first input
/// observation, with reduced accuracy over roughly the first `span` values
/// while the smoothing accumulates history.
pub fn ema(data: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || data.is_empty() {
        return vec![];
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len());
    result.push(data[0]);

    for i in 1..data.len() {
        let prev = result[i - 1];
        result.push((data[i] - prev) * alpha + prev);
    }
    result
}

/// Relative Strength Index from rolling arithmetic means of gains and
/// losses over a trailing window of `period` daily changes.
///
/// Aligned to the input: every index below `period` is undefined, as is any
/// position whose trailing mean loss is zero (the ratio is left undefined
/// rather than pinned to 100).
pub fn rsi(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; data.len()];
    if period == 0 || data.len() < period + 1 {
        return result;
    }

    let mut gains = Vec::with_capacity(data.len() - 1);
    let mut losses = Vec::with_capacity(data.len() - 1);
    for i in 1..data.len() {
        let change = data[i] - data[i - 1];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    // gains[j] is the move into data[j + 1]; the window ending at price
    // index i spans gains[i - period..i].
    for i in period..data.len() {
        let avg_gain = gains[i - period..i].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[i - period..i].iter().sum::<f64>() / period as f64;

        if avg_loss == 0.0 {
            continue;
        }
        let rs = avg_gain / avg_loss;
        result[i] = Some(100.0 - 100.0 / (1.0 + rs));
    }
    result
}

/// MACD line, signal line, and histogram, all aligned to the input
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Moving Average Convergence Divergence: the short/long EMA difference,
/// its own EMA as the signal line, and their difference as the histogram.
///
/// All three series are full length. Like the EMAs they are built from,
/// early values carry reduced accuracy instead of a hard warm-up cutoff.
pub fn macd(data: &[f64], short_span: usize, long_span: usize, signal_span: usize) -> MacdSeries {
    if short_span == 0 || long_span == 0 || signal_span == 0 || data.is_empty() {
        return MacdSeries {
            macd_line: vec![],
            signal_line: vec![],
            histogram: vec![],
        };
    }

    let ema_short = ema(data, short_span);
    let ema_long = ema(data, long_span);

    let macd_line: Vec<f64> = ema_short
        .iter()
        .zip(&ema_long)
        .map(|(s, l)| s - l)
        .collect();
    let signal_line = ema(&macd_line, signal_span);
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| m - s)
        .collect();

    MacdSeries {
        macd_line,
        signal_line,
        histogram,
    }
}

/// Last defined entry of an aligned indicator series
pub fn last_defined(series: &[Option<f64>]) -> Option<f64> {
    series.iter().rev().find_map(|v| *v)
}
