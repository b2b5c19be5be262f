//! Enumerated types for logical attribute references

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error when parsing an enumerated spec value from a string
#[derive(Debug, Clone)]
pub struct ParseEnumError {
    pub input: String,
    pub expected: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} '{}'", self.expected, self.input)
    }
}

impl std::error::Error for ParseEnumError {}

// ============================================================================
// SpecKind
// ============================================================================

/// The category a logical attribute reference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKind {
    Dimension,
    TimeDimension,
    Identifier,
    Measure,
    Metric,
}

impl SpecKind {
    /// Linkable kinds can be joined on and merged across sources
    pub fn is_linkable(&self) -> bool {
        matches!(self, SpecKind::Dimension | SpecKind::TimeDimension | SpecKind::Identifier)
    }
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecKind::Dimension => write!(f, "dimension"),
            SpecKind::TimeDimension => write!(f, "time dimension"),
            SpecKind::Identifier => write!(f, "identifier"),
            SpecKind::Measure => write!(f, "measure"),
            SpecKind::Metric => write!(f, "metric"),
        }
    }
}

// ============================================================================
// TimeGranularity
// ============================================================================

/// Bucket size of a time dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeGranularity {
    #[default]
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeGranularity::Day => "day",
            TimeGranularity::Week => "week",
            TimeGranularity::Month => "month",
            TimeGranularity::Quarter => "quarter",
            TimeGranularity::Year => "year",
        }
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeGranularity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(TimeGranularity::Day),
            "week" => Ok(TimeGranularity::Week),
            "month" => Ok(TimeGranularity::Month),
            "quarter" => Ok(TimeGranularity::Quarter),
            "year" => Ok(TimeGranularity::Year),
            _ => Err(ParseEnumError {
                input: s.to_string(),
                expected: "time granularity",
            }),
        }
    }
}

impl<'de> Deserialize<'de> for TimeGranularity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TimeGranularity::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TimeGranularity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Aggregation methods for measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aggregation {
    #[default]
    Sum,
    Min,
    Max,
    CountDistinct,
    /// Deprecated in favor of `SumBoolean`; still accepted in models
    Boolean,
    SumBoolean,
    Average,
    Percentile,
    Median,
    Count,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::CountDistinct => "count_distinct",
            Aggregation::Boolean => "boolean",
            Aggregation::SumBoolean => "sum_boolean",
            Aggregation::Average => "average",
            Aggregation::Percentile => "percentile",
            Aggregation::Median => "median",
            Aggregation::Count => "count",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Aggregation::Sum),
            "min" => Ok(Aggregation::Min),
            "max" => Ok(Aggregation::Max),
            "count_distinct" => Ok(Aggregation::CountDistinct),
            "boolean" => Ok(Aggregation::Boolean),
            "sum_boolean" => Ok(Aggregation::SumBoolean),
            "average" => Ok(Aggregation::Average),
            "percentile" => Ok(Aggregation::Percentile),
            "median" => Ok(Aggregation::Median),
            "count" => Ok(Aggregation::Count),
            _ => Err(ParseEnumError {
                input: s.to_string(),
                expected: "aggregation",
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Aggregation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Aggregation::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Aggregation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
