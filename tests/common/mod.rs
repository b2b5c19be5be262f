//! Shared test utilities for integration tests

use semspec::{
    emit_select_list, parser, CoalesceLinkableColumns, ColumnResolver, MappedColumnResolver,
    SelectColumnSet, SelectOnlyLinkableSpecs, SpecSet,
};

/// Load a spec set fixture from the tests/test_data directory
pub fn load_specs(name: &str) -> SpecSet {
    let path = format!("tests/test_data/{}", name);
    parser::parse_spec_set_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load a column map fixture from the tests/test_data directory
#[allow(dead_code)]
pub fn load_columns(name: &str) -> MappedColumnResolver {
    let path = format!("tests/test_data/{}", name);
    parser::parse_column_map_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Run the full pipeline: specs → linkable specs → coalesced columns
#[allow(dead_code)]
pub fn run_pipeline(
    specs: &SpecSet,
    resolver: &dyn ColumnResolver,
    aliases: &[&str],
) -> Result<SelectColumnSet, String> {
    let linkable = specs.transform(&SelectOnlyLinkableSpecs);
    linkable
        .transform(&CoalesceLinkableColumns::new(resolver, aliases.iter().copied()))
        .map_err(|e| format!("Transform failed: {}", e))
}

/// Run the pipeline and render the select-list
#[allow(dead_code)]
pub fn run_to_sql(specs: &SpecSet, resolver: &dyn ColumnResolver, aliases: &[&str]) -> Result<String, String> {
    let columns = run_pipeline(specs, resolver, aliases)?;
    emit_select_list(&columns).map_err(|e| format!("Emission failed: {}", e))
}

/// Output aliases of a column list
#[allow(dead_code)]
pub fn aliases(columns: &[semspec::SelectColumn]) -> Vec<&str> {
    columns.iter().map(|c| c.column_alias.as_str()).collect()
}
