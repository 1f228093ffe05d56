use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sentinel rendered for any value that could not be computed or was missing
pub const UNAVAILABLE: &str = "N/A";

/// A display-ready cell: a number, preformatted text, or the unavailable
/// sentinel.
///
/// Raw optionals, NaN, and infinities never cross this boundary; `from_raw`
/// folds them all into `Unavailable`, and serialization emits the literal
/// "N/A" string rather than a native null.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Unavailable,
}

impl CellValue {
    pub fn from_raw(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => CellValue::Number(v),
            _ => CellValue::Unavailable,
        }
    }

    pub fn from_count(value: Option<i64>) -> Self {
        match value {
            Some(v) => CellValue::Number(v as f64),
            None => CellValue::Unavailable,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Text when present, sentinel otherwise
    pub fn from_text(value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => CellValue::Text(v.into()),
            None => CellValue::Unavailable,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CellValue::Unavailable)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(v) => serializer.serialize_f64(*v),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => CellValue::from_raw(Some(v)),
            Raw::Text(s) if s == UNAVAILABLE => CellValue::Unavailable,
            Raw::Text(s) => CellValue::Text(s),
        })
    }
}
