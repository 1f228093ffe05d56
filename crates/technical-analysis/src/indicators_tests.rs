#[cfg(test)]
mod tests {
    use super::super::indicators::*;
    use super::super::snapshot::TechnicalSnapshot;

    // Helper function to create sample price data
    fn sample_prices() -> Vec<f64> {
        vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ]
    }

    // `len` closes whose daily changes alternate +1/-1, starting from `base`
    fn alternating_prices(base: f64, len: usize) -> Vec<f64> {
        let mut prices = vec![base];
        for i in 1..len {
            if i % 2 == 1 {
                prices.push(prices[i - 1] + 1.0);
            } else {
                prices.push(prices[i - 1] - 1.0);
            }
        }
        prices
    }

    #[test]
    fn test_sma_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3);

        assert_eq!(result.len(), data.len());
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        assert!((result[2].unwrap() - 2.0).abs() < 0.001); // (1+2+3)/3 = 2
        assert!((result[3].unwrap() - 3.0).abs() < 0.001); // (2+3+4)/3 = 3
        assert!((result[4].unwrap() - 4.0).abs() < 0.001); // (3+4+5)/3 = 4
    }

    #[test]
    fn test_sma_insufficient_data() {
        let data = vec![1.0, 2.0];
        let result = sma(&data, 5);

        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn test_sma_empty_data() {
        let data: Vec<f64> = vec![];
        assert!(sma(&data, 3).is_empty());
    }

    #[test]
    fn test_sma_zero_window() {
        let data = vec![1.0, 2.0, 3.0];
        assert_eq!(sma(&data, 0), vec![None, None, None]);
    }

    #[test]
    fn test_sma_real_prices() {
        let prices = sample_prices();
        let result = sma(&prices, 5);

        // First defined position is window - 1, averaging the first 5 closes
        let expected_first = (44.34 + 44.09 + 44.15 + 43.61 + 44.33) / 5.0;
        assert_eq!(result[3], None);
        assert!((result[4].unwrap() - expected_first).abs() < 0.01);
    }

    #[test]
    fn test_ema_seeds_with_first_observation() {
        let data = vec![22.0, 24.0, 23.0, 25.0, 26.0];
        let result = ema(&data, 3);

        assert_eq!(result.len(), data.len());
        // alpha = 0.5 for span 3
        assert!((result[0] - 22.0).abs() < 1e-9);
        assert!((result[1] - 23.0).abs() < 1e-9);
        assert!((result[2] - 23.0).abs() < 1e-9);
        assert!((result[3] - 24.0).abs() < 1e-9);
        assert!((result[4] - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_ema_empty_data() {
        let data: Vec<f64> = vec![];
        assert!(ema(&data, 5).is_empty());
    }

    #[test]
    fn test_ema_increases_with_uptrend() {
        let data: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let result = ema(&data, 3);

        for i in 1..result.len() {
            assert!(result[i] > result[i - 1]);
        }
    }

    #[test]
    fn test_rsi_undefined_before_period() {
        let prices = sample_prices();
        let result = rsi(&prices, 14);

        assert_eq!(result.len(), prices.len());
        for value in &result[..14] {
            assert_eq!(*value, None);
        }
        assert!(result[14].is_some());
    }

    #[test]
    fn test_rsi_bounded() {
        let prices = sample_prices();
        let result = rsi(&prices, 14);

        for value in result.iter().flatten() {
            assert!(*value >= 0.0 && *value <= 100.0);
        }
    }

    #[test]
    fn test_rsi_equal_gains_and_losses_is_50() {
        // 15 closes with alternating +1/-1 changes: the window of 14 daily
        // changes holds seven unit gains and seven unit losses
        let prices = alternating_prices(100.0, 15);
        let result = rsi(&prices, 14);

        assert!((result[14].unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_short_series_all_undefined() {
        for len in [13, 14] {
            let prices = alternating_prices(100.0, len);
            let result = rsi(&prices, 14);
            assert!(result.iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_rsi_zero_loss_window_undefined() {
        // Strictly rising closes: mean loss is zero in every window, so the
        // ratio is undefined everywhere instead of reading 100
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&prices, 14);

        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_rsi_empty_data() {
        let data: Vec<f64> = vec![];
        assert!(rsi(&data, 14).is_empty());
    }

    #[test]
    fn test_macd_full_length_alignment() {
        let prices = sample_prices();
        let result = macd(&prices, 12, 26, 9);

        assert_eq!(result.macd_line.len(), prices.len());
        assert_eq!(result.signal_line.len(), prices.len());
        assert_eq!(result.histogram.len(), prices.len());
    }

    #[test]
    fn test_macd_histogram_identity() {
        let prices = sample_prices();
        let result = macd(&prices, 12, 26, 9);

        for i in 0..result.histogram.len() {
            let expected = result.macd_line[i] - result.signal_line[i];
            assert!((result.histogram[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_empty_data() {
        let data: Vec<f64> = vec![];
        let result = macd(&data, 12, 26, 9);

        assert!(result.macd_line.is_empty());
        assert!(result.signal_line.is_empty());
        assert!(result.histogram.is_empty());
    }

    #[test]
    fn test_macd_flat_series_is_zero() {
        let prices = vec![50.0; 40];
        let result = macd(&prices, 12, 26, 9);

        for value in &result.macd_line {
            assert!(value.abs() < 1e-12);
        }
        for value in &result.histogram {
            assert!(value.abs() < 1e-12);
        }
    }

    #[test]
    fn test_last_defined() {
        assert_eq!(last_defined(&[None, Some(1.0), Some(2.0), None]), Some(2.0));
        assert_eq!(last_defined(&[None, None]), None);
        assert_eq!(last_defined(&[]), None);
    }

    #[test]
    fn test_snapshot_short_history_degrades_per_indicator() {
        // 13 closes: too short for RSI(14) and every SMA window, but MACD
        // is defined from the first observation
        let series = alternating_prices(100.0, 13);
        let snapshot = TechnicalSnapshot::from_closes(&series);

        assert_eq!(snapshot.rsi_14, None);
        assert_eq!(snapshot.sma_20, None);
        assert_eq!(snapshot.sma_50, None);
        assert_eq!(snapshot.sma_200, None);
        assert!(snapshot.macd.is_some());
        assert!(snapshot.macd_signal.is_some());
    }

    #[test]
    fn test_snapshot_long_history_fills_all_windows() {
        let series = alternating_prices(100.0, 250);
        let snapshot = TechnicalSnapshot::from_closes(&series);

        assert!(snapshot.rsi_14.is_some());
        assert!(snapshot.sma_20.is_some());
        assert!(snapshot.sma_50.is_some());
        assert!(snapshot.sma_200.is_some());
        assert!(snapshot.macd.is_some());
        assert!(snapshot.macd_signal.is_some());
    }
}
