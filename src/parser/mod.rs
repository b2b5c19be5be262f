//! YAML loader (verb module)
//!
//! Reads spec sets and column maps from YAML files.

use std::path::Path;
use serde::de::DeserializeOwned;
use crate::error::ParseError;
use crate::resolver::MappedColumnResolver;
use crate::spec::SpecSet;

/// Parse a spec set from a YAML file
pub fn parse_spec_set_file<P: AsRef<Path>>(path: P) -> Result<SpecSet, ParseError> {
    parse_file(path)
}

/// Parse a spec set from a YAML string
pub fn parse_spec_set_str(yaml: &str) -> Result<SpecSet, ParseError> {
    parse_str(yaml)
}

/// Parse a column map from a YAML file
pub fn parse_column_map_file<P: AsRef<Path>>(path: P) -> Result<MappedColumnResolver, ParseError> {
    parse_file(path)
}

/// Parse a column map from a YAML string
pub fn parse_column_map_str(yaml: &str) -> Result<MappedColumnResolver, ParseError> {
    parse_str(yaml)
}

fn parse_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

fn parse_str<T: DeserializeOwned>(yaml: &str) -> Result<T, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::resolver::ColumnResolver;
    use crate::spec::{DimensionSpec, IdentifierSpec, InstanceSpec, TimeGranularity};

    #[test]
    fn test_parse_spec_set() {
        let yaml = r#"
dimensions:
  - name: is_instant
  - name: country
    links: [listing]
time_dimensions:
  - name: ds
    granularity: month
identifiers:
  - name: listing
measures:
  - name: bookings
"#;
        let set = parse_spec_set_str(yaml).unwrap();

        assert_eq!(set.dimension_specs().len(), 2);
        assert_eq!(set.dimension_specs()[1].qualified_name(), "listing__country");
        assert_eq!(set.time_dimension_specs()[0].granularity, TimeGranularity::Month);
        assert_eq!(set.identifier_specs(), &[IdentifierSpec::new("listing")]);
        assert_eq!(set.measure_specs().len(), 1);
        assert!(set.metric_specs().is_empty());
    }

    #[test]
    fn test_parse_time_dimension_default_granularity() {
        let set = parse_spec_set_str("time_dimensions:\n  - name: ds\n").unwrap();
        assert_eq!(set.time_dimension_specs()[0].granularity, TimeGranularity::Day);
    }

    #[test]
    fn test_parse_invalid_granularity() {
        let err = parse_spec_set_str("time_dimensions:\n  - name: ds\n    granularity: hourly\n").unwrap_err();
        assert!(matches!(err, ParseError::Yaml { .. }));
    }

    #[test]
    fn test_parse_column_map() {
        let yaml = r#"
dimensions:
  is_instant: is_instant
identifiers:
  user_listing: [user_id, listing_id]
"#;
        let resolver = parse_column_map_str(yaml).unwrap();
        let cols = resolver.resolve_dimension(&DimensionSpec::new("is_instant")).unwrap();
        assert_eq!(cols[0].column_name, "is_instant");
        let cols = resolver.resolve_identifier(&IdentifierSpec::new("user_listing")).unwrap();
        assert_eq!(cols.len(), 2);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dimensions:\n  - name: is_instant").unwrap();

        let set = parse_spec_set_file(file.path()).unwrap();
        assert_eq!(set.dimension_specs(), &[DimensionSpec::new("is_instant")]);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_spec_set_file("does/not/exist.yaml").unwrap_err();
        match err {
            ParseError::Io { path, .. } => assert_eq!(path, "does/not/exist.yaml"),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
