//! Categorized spec set

use serde::Deserialize;
use super::attribute::{DimensionSpec, IdentifierSpec, MeasureSpec, MetricSpec, TimeDimensionSpec};
use crate::transform::SpecSetTransform;

/// Logical attribute references partitioned by category.
///
/// Order within each category is significant: it becomes output column order.
/// A set is never mutated once built; transforms produce new sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpecSet {
    #[serde(default, rename = "dimensions")]
    dimension_specs: Vec<DimensionSpec>,
    #[serde(default, rename = "time_dimensions")]
    time_dimension_specs: Vec<TimeDimensionSpec>,
    #[serde(default, rename = "identifiers")]
    identifier_specs: Vec<IdentifierSpec>,
    #[serde(default, rename = "measures")]
    measure_specs: Vec<MeasureSpec>,
    #[serde(default, rename = "metrics")]
    metric_specs: Vec<MetricSpec>,
}

impl SpecSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension_specs(mut self, specs: Vec<DimensionSpec>) -> Self {
        self.dimension_specs = specs;
        self
    }

    pub fn with_time_dimension_specs(mut self, specs: Vec<TimeDimensionSpec>) -> Self {
        self.time_dimension_specs = specs;
        self
    }

    pub fn with_identifier_specs(mut self, specs: Vec<IdentifierSpec>) -> Self {
        self.identifier_specs = specs;
        self
    }

    pub fn with_measure_specs(mut self, specs: Vec<MeasureSpec>) -> Self {
        self.measure_specs = specs;
        self
    }

    pub fn with_metric_specs(mut self, specs: Vec<MetricSpec>) -> Self {
        self.metric_specs = specs;
        self
    }

    pub fn dimension_specs(&self) -> &[DimensionSpec] {
        &self.dimension_specs
    }

    pub fn time_dimension_specs(&self) -> &[TimeDimensionSpec] {
        &self.time_dimension_specs
    }

    pub fn identifier_specs(&self) -> &[IdentifierSpec] {
        &self.identifier_specs
    }

    pub fn measure_specs(&self) -> &[MeasureSpec] {
        &self.measure_specs
    }

    pub fn metric_specs(&self) -> &[MetricSpec] {
        &self.metric_specs
    }

    /// Number of dimension, time dimension and identifier specs
    pub fn linkable_count(&self) -> usize {
        self.dimension_specs.len() + self.time_dimension_specs.len() + self.identifier_specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linkable_count() == 0 && self.measure_specs.is_empty() && self.metric_specs.is_empty()
    }

    /// Concatenate two sets category by category, `self` first
    pub fn merge(&self, other: &SpecSet) -> SpecSet {
        fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
            a.iter().chain(b.iter()).cloned().collect()
        }

        SpecSet {
            dimension_specs: concat(&self.dimension_specs, &other.dimension_specs),
            time_dimension_specs: concat(&self.time_dimension_specs, &other.time_dimension_specs),
            identifier_specs: concat(&self.identifier_specs, &other.identifier_specs),
            measure_specs: concat(&self.measure_specs, &other.measure_specs),
            metric_specs: concat(&self.metric_specs, &other.metric_specs),
        }
    }

    /// Apply a transform to this set
    pub fn transform<T>(&self, transform: &impl SpecSetTransform<T>) -> T {
        transform.transform(self)
    }
}
