use tracing::trace;

use crate::spec::SpecSet;
use super::SpecSetTransform;

/// Drops measures and metrics, keeping dimensions, time dimensions and identifiers as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOnlyLinkableSpecs;

impl SpecSetTransform<SpecSet> for SelectOnlyLinkableSpecs {
    fn transform(&self, spec_set: &SpecSet) -> SpecSet {
        trace!(
            measures = spec_set.measure_specs().len(),
            metrics = spec_set.metric_specs().len(),
            "dropping non-linkable specs"
        );

        SpecSet::new()
            .with_dimension_specs(spec_set.dimension_specs().to_vec())
            .with_time_dimension_specs(spec_set.time_dimension_specs().to_vec())
            .with_identifier_specs(spec_set.identifier_specs().to_vec())
    }
}
