use std::collections::{BTreeSet, HashMap};

use crate::error::SchemaDiffError;
use crate::model::diff::{Classification, DiffReport, FieldRecord, Source, TYPE_DIFF_MARKER};
use crate::model::{Field, Schema};

#[derive(Debug, Clone)]
struct RegisteredSource {
    source: Source,
    // field name -> type descriptor, last declaration wins
    fields: HashMap<String, String>,
}

/// Accumulates schemas from named sources, then compares them all at once.
///
/// ```ignore
/// let mut engine = SchemaDiffEngine::new();
/// engine.register("yellow", vec![("vendor_id", "int64")])?;
/// engine.register("green", vec![("vendor_id", "int32")])?;
/// let report = engine.compare()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaDiffEngine {
    sources: Vec<RegisteredSource>,
}

impl SchemaDiffEngine {
    pub fn new() -> SchemaDiffEngine {
        SchemaDiffEngine::default()
    }

    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    pub fn sources(&self) -> Vec<&Source> {
        self.sources.iter().map(|s| &s.source).collect()
    }

    /// Register a source whose label is its name.
    pub fn register<F>(
        &mut self,
        name: impl AsRef<str>,
        fields: impl IntoIterator<Item = F>,
    ) -> Result<(), SchemaDiffError>
    where
        F: Into<Field>,
    {
        self.register_source(Source::new(name), fields)
    }

    pub fn register_schema(
        &mut self,
        source: Source,
        schema: &Schema,
    ) -> Result<(), SchemaDiffError> {
        self.register_source(source, schema.fields.iter().cloned())
    }

    pub fn register_source<F>(
        &mut self,
        source: Source,
        fields: impl IntoIterator<Item = F>,
    ) -> Result<(), SchemaDiffError>
    where
        F: Into<Field>,
    {
        if self.sources.iter().any(|s| s.source.name == source.name) {
            return Err(SchemaDiffError::duplicate_source(&source.name));
        }

        let mut by_name: HashMap<String, String> = HashMap::new();
        let mut num_declared = 0;
        for field in fields {
            let field: Field = field.into();
            by_name.insert(field.name, field.dtype);
            num_declared += 1;
        }

        log::debug!(
            "register source {:?} with {} fields ({} declared)",
            source.name,
            by_name.len(),
            num_declared
        );

        self.sources.push(RegisteredSource {
            source,
            fields: by_name,
        });
        Ok(())
    }

    pub fn compare(&self) -> Result<DiffReport, SchemaDiffError> {
        if self.sources.is_empty() {
            return Err(SchemaDiffError::empty_engine());
        }

        let total_sources = self.sources.len();

        // BTreeSet keeps the union in byte-wise lexicographic order
        let all_names: BTreeSet<&str> = self
            .sources
            .iter()
            .flat_map(|s| s.fields.keys().map(|k| k.as_str()))
            .collect();

        let mut records: Vec<FieldRecord> = Vec::with_capacity(all_names.len());
        let mut exclusive: Vec<Vec<String>> = vec![vec![]; total_sources];
        let mut type_mismatches: Vec<String> = vec![];
        let mut common: Vec<String> = vec![];

        for name in all_names {
            let types: Vec<Option<String>> = self
                .sources
                .iter()
                .map(|s| s.fields.get(name).cloned())
                .collect();

            let present: Vec<(usize, &str)> = types
                .iter()
                .enumerate()
                .filter_map(|(idx, dtype)| dtype.as_deref().map(|t| (idx, t)))
                .collect();

            // The union guarantees at least one present source
            let (first_idx, first_type) = present[0];
            let types_equal = present.iter().all(|(_, t)| *t == first_type);
            let classification =
                Classification::classify(present.len(), total_sources, types_equal, first_idx);

            let annotation = match classification {
                Classification::Exclusive(idx) => {
                    exclusive[idx].push(name.to_string());
                    Some(self.sources[idx].source.exclusive_marker())
                }
                Classification::TypeMismatch => {
                    type_mismatches.push(name.to_string());
                    Some(TYPE_DIFF_MARKER.to_string())
                }
                Classification::Common => {
                    common.push(name.to_string());
                    None
                }
            };

            records.push(FieldRecord {
                name: name.to_string(),
                types,
                classification,
                annotation,
            });
        }

        log::debug!(
            "compared {} sources: {} fields, {} common, {} type mismatches",
            total_sources,
            records.len(),
            common.len(),
            type_mismatches.len()
        );

        Ok(DiffReport {
            sources: self.sources.iter().map(|s| s.source.clone()).collect(),
            records,
            source_totals: self.sources.iter().map(|s| s.fields.len()).collect(),
            exclusive,
            type_mismatches,
            common,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::core::diff::SchemaDiffEngine;
    use crate::error::SchemaDiffError;
    use crate::model::diff::{Classification, Source};

    fn taxi_engine() -> Result<SchemaDiffEngine, SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register(
            "yellow",
            vec![
                ("VendorID", "int64"),
                ("tpep_pickup_datetime", "timestamp[us]"),
                ("fare_amount", "double"),
                ("airport_fee", "double"),
                ("passenger_count", "int64"),
            ],
        )?;
        engine.register(
            "green",
            vec![
                ("VendorID", "int64"),
                ("lpep_pickup_datetime", "timestamp[us]"),
                ("fare_amount", "double"),
                ("trip_type", "double"),
                ("passenger_count", "double"),
            ],
        )?;
        engine.register(
            "fhv",
            vec![
                ("dispatching_base_num", "string"),
                ("pickup_datetime", "timestamp[us]"),
                ("PUlocationID", "double"),
                ("passenger_count", "int32"),
            ],
        )?;
        Ok(engine)
    }

    #[test]
    fn test_compare_two_of_three_with_equal_types_is_type_diff() -> Result<(), SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register("yellow", vec![("vendor_id", "int64"), ("fare", "double")])?;
        engine.register("green", vec![("vendor_id", "int64"), ("fare", "double")])?;
        engine.register("fhv", vec![("vendor_id", "int64")])?;

        let report = engine.compare()?;

        let fare = report.get_record("fare").unwrap();
        assert_eq!(fare.classification, Classification::TypeMismatch);
        assert_eq!(fare.annotation.as_deref(), Some("TYPE DIFF"));
        assert_eq!(
            report.classification_of("vendor_id"),
            Some(Classification::Common)
        );
        assert!(report.get_record("vendor_id").unwrap().annotation.is_none());
        assert_eq!(report.type_mismatches, vec!["fare"]);
        assert_eq!(report.common, vec!["vendor_id"]);
        Ok(())
    }

    #[test]
    fn test_compare_single_source_everything_exclusive() -> Result<(), SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register(
            "yellow",
            vec![("vendor_id", "int64"), ("fare", "double"), ("tip", "double")],
        )?;

        let report = engine.compare()?;

        assert_eq!(report.exclusive_to("yellow"), &["fare", "tip", "vendor_id"]);
        assert!(report.common.is_empty());
        assert!(report.type_mismatches.is_empty());
        assert_eq!(report.source_totals, vec![3]);
        assert!(report
            .records
            .iter()
            .all(|r| r.classification == Classification::Exclusive(0)));
        Ok(())
    }

    #[test]
    fn test_register_duplicate_source_fails() -> Result<(), SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register("yellow", vec![("vendor_id", "int64")])?;

        let result = engine.register("yellow", vec![("fare", "double")]);
        assert!(matches!(result, Err(SchemaDiffError::DuplicateSource(_))));

        // The first registration is untouched
        assert_eq!(engine.num_sources(), 1);
        let report = engine.compare()?;
        assert!(report.get_record("fare").is_none());
        Ok(())
    }

    #[test]
    fn test_register_duplicate_source_with_different_label_fails() -> Result<(), SchemaDiffError>
    {
        let mut engine = SchemaDiffEngine::new();
        engine.register_source(Source::with_label("fhv", "FHV Taxi"), vec![("a", "int64")])?;
        let result = engine.register_source(
            Source::with_label("fhv", "For Hire"),
            Vec::<(&str, &str)>::new(),
        );
        assert!(matches!(result, Err(SchemaDiffError::DuplicateSource(_))));
        Ok(())
    }

    #[test]
    fn test_compare_without_sources_fails() {
        let engine = SchemaDiffEngine::new();
        let result = engine.compare();
        assert!(matches!(result, Err(SchemaDiffError::EmptyEngine(_))));
    }

    #[test]
    fn test_compare_three_way_type_mismatch_keeps_every_type() -> Result<(), SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register("yellow", vec![("passenger_count", "int64")])?;
        engine.register("green", vec![("passenger_count", "int64")])?;
        engine.register("fhv", vec![("passenger_count", "int32")])?;

        let report = engine.compare()?;
        let record = report.get_record("passenger_count").unwrap();

        assert_eq!(record.classification, Classification::TypeMismatch);
        assert_eq!(
            record.types,
            vec![
                Some("int64".to_string()),
                Some("int64".to_string()),
                Some("int32".to_string())
            ]
        );
        Ok(())
    }

    #[test]
    fn test_register_last_declaration_wins() -> Result<(), SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register(
            "yellow",
            vec![("fare", "int64"), ("tip", "double"), ("fare", "double")],
        )?;
        engine.register("green", vec![("fare", "double"), ("tip", "double")])?;

        let report = engine.compare()?;

        assert_eq!(
            report.classification_of("fare"),
            Some(Classification::Common)
        );
        // Totals count distinct names
        assert_eq!(report.source_totals, vec![2, 2]);
        Ok(())
    }

    #[test]
    fn test_compare_is_deterministic() -> Result<(), SchemaDiffError> {
        let engine = taxi_engine()?;
        let first = engine.compare()?;
        let second = engine.compare()?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_compare_union_is_complete_and_sorted() -> Result<(), SchemaDiffError> {
        let engine = taxi_engine()?;
        let report = engine.compare()?;

        let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert!(names.windows(2).all(|w| w[0] < w[1]));

        let expected: BTreeSet<&str> = [
            "VendorID",
            "tpep_pickup_datetime",
            "fare_amount",
            "airport_fee",
            "passenger_count",
            "lpep_pickup_datetime",
            "trip_type",
            "dispatching_base_num",
            "pickup_datetime",
            "PUlocationID",
        ]
        .into_iter()
        .collect();
        let actual: BTreeSet<&str> = names.into_iter().collect();
        assert_eq!(actual, expected);

        // Upper case sorts before lower case
        assert_eq!(report.records[0].name, "PUlocationID");
        Ok(())
    }

    #[test]
    fn test_compare_buckets_partition_the_fields() -> Result<(), SchemaDiffError> {
        let engine = taxi_engine()?;
        let report = engine.compare()?;

        let bucket_total: usize = report.exclusive.iter().map(|b| b.len()).sum::<usize>()
            + report.type_mismatches.len()
            + report.common.len();
        assert_eq!(bucket_total, report.num_fields());

        assert_eq!(
            report.exclusive_to("yellow"),
            &["airport_fee", "tpep_pickup_datetime"]
        );
        assert_eq!(
            report.exclusive_to("green"),
            &["lpep_pickup_datetime", "trip_type"]
        );
        assert_eq!(
            report.exclusive_to("fhv"),
            &["PUlocationID", "dispatching_base_num", "pickup_datetime"]
        );
        assert_eq!(
            report.type_mismatches,
            vec!["VendorID", "fare_amount", "passenger_count"]
        );
        assert!(report.common.is_empty());
        assert_eq!(report.source_totals, vec![5, 5, 4]);
        Ok(())
    }

    #[test]
    fn test_exclusive_and_common_match_name_sets() -> Result<(), SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register("a", vec![("id", "int64"), ("x", "string"), ("only_a", "bool")])?;
        engine.register("b", vec![("id", "int64"), ("x", "large_string")])?;

        let report = engine.compare()?;

        assert_eq!(report.classification_of("id"), Some(Classification::Common));
        assert_eq!(
            report.classification_of("x"),
            Some(Classification::TypeMismatch)
        );
        assert_eq!(
            report.classification_of("only_a"),
            Some(Classification::Exclusive(0))
        );
        assert_eq!(
            report.get_record("only_a").unwrap().annotation.as_deref(),
            Some("A ONLY")
        );
        assert!(!report.get_record("only_a").unwrap().is_present_in(1));
        Ok(())
    }

    #[test]
    fn test_register_source_with_no_fields() -> Result<(), SchemaDiffError> {
        let mut engine = SchemaDiffEngine::new();
        engine.register("empty", Vec::<(&str, &str)>::new())?;
        engine.register("green", vec![("fare", "double")])?;

        let report = engine.compare()?;
        assert_eq!(report.source_totals, vec![0, 1]);
        assert_eq!(report.exclusive_to("green"), &["fare"]);
        assert!(report.exclusive_to("empty").is_empty());
        assert!(report.has_differences());
        Ok(())
    }
}
