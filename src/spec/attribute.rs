//! Logical attribute references
//!
//! Each spec names an attribute independently of where it is physically stored.

use serde::Deserialize;
use super::types::{SpecKind, TimeGranularity};

/// Separator between the parts of a qualified name
pub const DUNDER: &str = "__";

/// Capability shared by every logical attribute reference
pub trait InstanceSpec {
    /// Name of the attribute in its defining model
    fn element_name(&self) -> &str;

    fn kind(&self) -> SpecKind;

    /// Identifier links traversed to reach the attribute, outermost first
    fn identifier_links(&self) -> &[String] {
        &[]
    }

    /// Unique name of the attribute within a query, e.g. `booking__ds__month`
    fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = self.identifier_links().iter().map(String::as_str).collect();
        parts.push(self.element_name());
        parts.join(DUNDER)
    }
}

/// A non-time categorical attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct DimensionSpec {
    #[serde(rename = "name")]
    pub element_name: String,
    #[serde(default, rename = "links")]
    pub identifier_links: Vec<String>,
}

impl DimensionSpec {
    pub fn new(element_name: impl Into<String>) -> Self {
        Self {
            element_name: element_name.into(),
            identifier_links: Vec::new(),
        }
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier_links = links.into_iter().map(Into::into).collect();
        self
    }
}

impl InstanceSpec for DimensionSpec {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn kind(&self) -> SpecKind {
        SpecKind::Dimension
    }

    fn identifier_links(&self) -> &[String] {
        &self.identifier_links
    }
}

/// A time-bucketed attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct TimeDimensionSpec {
    #[serde(rename = "name")]
    pub element_name: String,
    #[serde(default, rename = "links")]
    pub identifier_links: Vec<String>,
    #[serde(default)]
    pub granularity: TimeGranularity,
}

impl TimeDimensionSpec {
    pub fn new(element_name: impl Into<String>, granularity: TimeGranularity) -> Self {
        Self {
            element_name: element_name.into(),
            identifier_links: Vec::new(),
            granularity,
        }
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier_links = links.into_iter().map(Into::into).collect();
        self
    }
}

impl InstanceSpec for TimeDimensionSpec {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn kind(&self) -> SpecKind {
        SpecKind::TimeDimension
    }

    fn identifier_links(&self) -> &[String] {
        &self.identifier_links
    }

    fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = self.identifier_links.iter().map(String::as_str).collect();
        parts.push(&self.element_name);
        parts.push(self.granularity.as_str());
        parts.join(DUNDER)
    }
}

/// A join-key attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct IdentifierSpec {
    #[serde(rename = "name")]
    pub element_name: String,
    #[serde(default, rename = "links")]
    pub identifier_links: Vec<String>,
}

impl IdentifierSpec {
    pub fn new(element_name: impl Into<String>) -> Self {
        Self {
            element_name: element_name.into(),
            identifier_links: Vec::new(),
        }
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier_links = links.into_iter().map(Into::into).collect();
        self
    }
}

impl InstanceSpec for IdentifierSpec {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn kind(&self) -> SpecKind {
        SpecKind::Identifier
    }

    fn identifier_links(&self) -> &[String] {
        &self.identifier_links
    }
}

/// An aggregatable numeric attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MeasureSpec {
    #[serde(rename = "name")]
    pub element_name: String,
}

impl MeasureSpec {
    pub fn new(element_name: impl Into<String>) -> Self {
        Self { element_name: element_name.into() }
    }
}

impl InstanceSpec for MeasureSpec {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn kind(&self) -> SpecKind {
        SpecKind::Measure
    }
}

/// A metric computed from one or more measures
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MetricSpec {
    #[serde(rename = "name")]
    pub element_name: String,
}

impl MetricSpec {
    pub fn new(element_name: impl Into<String>) -> Self {
        Self { element_name: element_name.into() }
    }
}

impl InstanceSpec for MetricSpec {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn kind(&self) -> SpecKind {
        SpecKind::Metric
    }
}
