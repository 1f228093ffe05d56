//! Threshold classifiers over the report's continuous metrics.
//!
//! Each classifier is stateless and total over its declared domain, and a
//! missing input stays missing: `None` in, `None` out, so absent data can
//! never be mislabeled as a named bucket.

use serde::{Deserialize, Serialize};

/// Upside bucket over the decimal upside fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsideBucket {
    High,
    Medium,
    Negative,
}

impl UpsideBucket {
    pub fn label(&self) -> &'static str {
        match self {
            UpsideBucket::High => "High (>10%)",
            UpsideBucket::Medium => "Medium (0–10%)",
            UpsideBucket::Negative => "Negative",
        }
    }
}

pub fn upside_bucket(upside: Option<f64>) -> Option<UpsideBucket> {
    let value = upside.filter(|v| v.is_finite())?;
    Some(if value >= 0.10 {
        UpsideBucket::High
    } else if value >= 0.0 {
        UpsideBucket::Medium
    } else {
        UpsideBucket::Negative
    })
}

/// ESG quality bucket over a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EsgCategory {
    Good,
    Average,
    Poor,
}

impl EsgCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EsgCategory::Good => "Good (≥60)",
            EsgCategory::Average => "Average (40–59)",
            EsgCategory::Poor => "Poor (<40)",
        }
    }
}

pub fn esg_category(score: Option<f64>) -> Option<EsgCategory> {
    let value = score.filter(|v| v.is_finite())?;
    Some(if value >= 60.0 {
        EsgCategory::Good
    } else if value >= 40.0 {
        EsgCategory::Average
    } else {
        EsgCategory::Poor
    })
}

/// Momentum reading over a 0-100 RSI value; both bounds are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiStatus {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RsiStatus::Overbought => "Overbought (>70)",
            RsiStatus::Oversold => "Oversold (<30)",
            RsiStatus::Neutral => "Neutral",
        }
    }
}

pub fn rsi_status(rsi: Option<f64>) -> Option<RsiStatus> {
    let value = rsi.filter(|v| v.is_finite())?;
    Some(if value > 70.0 {
        RsiStatus::Overbought
    } else if value < 30.0 {
        RsiStatus::Oversold
    } else {
        RsiStatus::Neutral
    })
}
