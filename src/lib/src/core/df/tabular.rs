//! Read column schemas from tabular files with polars, without materializing the rows
//!

use polars::prelude::*;
use std::ffi::OsStr;
use std::fs::File;
use std::path::Path;

use crate::constants::DEFAULT_INFER_SCHEMA_LEN;
use crate::error::SchemaDiffError;
use crate::model::{Field, Schema};

pub fn scan_df_parquet(path: impl AsRef<Path>) -> Result<LazyFrame, SchemaDiffError> {
    let path = path.as_ref();
    log::debug!("scan_df_parquet path: {:?}", path);
    LazyFrame::scan_parquet(path, ScanArgsParquet::default())
        .map_err(|err| SchemaDiffError::loader_failure(path, err))
}

pub fn scan_df_arrow(path: impl AsRef<Path>) -> Result<LazyFrame, SchemaDiffError> {
    let path = path.as_ref();
    log::debug!("scan_df_arrow path: {:?}", path);
    LazyFrame::scan_ipc(path, ScanArgsIpc::default())
        .map_err(|err| SchemaDiffError::loader_failure(path, err))
}

pub fn scan_df_csv(path: impl AsRef<Path>, delimiter: u8) -> Result<LazyFrame, SchemaDiffError> {
    let path = path.as_ref();
    log::debug!(
        "scan_df_csv path: {:?} delimiter: {:?}",
        path,
        delimiter as char
    );
    LazyCsvReader::new(path)
        .with_separator(delimiter)
        .with_infer_schema_length(Some(DEFAULT_INFER_SCHEMA_LEN))
        .with_has_header(true)
        .finish()
        .map_err(|err| SchemaDiffError::loader_failure(path, err))
}

pub fn scan_df(path: impl AsRef<Path>) -> Result<LazyFrame, SchemaDiffError> {
    let path = path.as_ref();
    if !path.exists() {
        let cause = SchemaDiffError::path_does_not_exist(path);
        return Err(SchemaDiffError::loader_failure(path, cause));
    }

    let extension = path.extension().and_then(OsStr::to_str);
    match extension {
        Some("parquet") => scan_df_parquet(path),
        Some("arrow") | Some("ipc") | Some("feather") => scan_df_arrow(path),
        Some("csv") => scan_df_csv(path, b','),
        Some("tsv") => scan_df_csv(path, b'\t'),
        _ => Err(SchemaDiffError::unknown_file_type(path)),
    }
}

/// Ordered (name, type descriptor) pairs for every column of the file, in file order.
pub fn read_schema(path: impl AsRef<Path>) -> Result<Schema, SchemaDiffError> {
    let path = path.as_ref();
    let mut df = scan_df(path)?;
    let schema = df
        .collect_schema()
        .map_err(|err| SchemaDiffError::loader_failure(path, err))?;

    let fields: Vec<Field> = schema
        .iter()
        .map(|(name, dtype)| Field::new(name.as_str(), dtype_descriptor(dtype)))
        .collect();
    log::debug!("read_schema {:?} got {} fields", path, fields.len());

    let mut schema = Schema::from_fields(fields);
    if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
        schema = schema.with_name(stem);
    }
    Ok(schema)
}

/// Arrow style name for a polars dtype, ie `int64`, `double`, `timestamp[us]`
pub fn dtype_descriptor(dtype: &DataType) -> String {
    match dtype {
        DataType::Boolean => String::from("bool"),
        DataType::UInt8 => String::from("uint8"),
        DataType::UInt16 => String::from("uint16"),
        DataType::UInt32 => String::from("uint32"),
        DataType::UInt64 => String::from("uint64"),
        DataType::Int8 => String::from("int8"),
        DataType::Int16 => String::from("int16"),
        DataType::Int32 => String::from("int32"),
        DataType::Int64 => String::from("int64"),
        DataType::Float32 => String::from("float"),
        DataType::Float64 => String::from("double"),
        DataType::String => String::from("string"),
        DataType::Binary => String::from("binary"),
        DataType::Date => String::from("date32[day]"),
        DataType::Datetime(unit, None) => format!("timestamp[{}]", time_unit_str(unit)),
        DataType::Datetime(unit, Some(tz)) => {
            format!("timestamp[{}, tz={}]", time_unit_str(unit), tz)
        }
        DataType::Duration(unit) => format!("duration[{}]", time_unit_str(unit)),
        DataType::Time => String::from("time64[ns]"),
        DataType::List(inner) => format!("list<item: {}>", dtype_descriptor(inner)),
        DataType::Null => String::from("null"),
        other => other.to_string(),
    }
}

fn time_unit_str(unit: &TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Nanoseconds => "ns",
        TimeUnit::Microseconds => "us",
        TimeUnit::Milliseconds => "ms",
    }
}

pub fn write_df_parquet(df: &mut DataFrame, output: impl AsRef<Path>) -> Result<(), SchemaDiffError> {
    let output = output.as_ref();
    log::debug!("Writing file {:?}", output);
    let file =
        File::create(output).map_err(|err| SchemaDiffError::file_create_error(output, err))?;
    ParquetWriter::new(file).finish(df)?;
    Ok(())
}

pub fn write_df_csv(
    df: &mut DataFrame,
    output: impl AsRef<Path>,
    delimiter: u8,
) -> Result<(), SchemaDiffError> {
    let output = output.as_ref();
    log::debug!("Writing file {:?}", output);
    let file =
        File::create(output).map_err(|err| SchemaDiffError::file_create_error(output, err))?;
    CsvWriter::new(file)
        .include_header(true)
        .with_separator(delimiter)
        .finish(df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use crate::core::df::tabular;
    use crate::error::SchemaDiffError;
    use crate::model::Field;
    use crate::test;

    #[test]
    fn test_dtype_descriptor_primitives() {
        assert_eq!(tabular::dtype_descriptor(&DataType::Int64), "int64");
        assert_eq!(tabular::dtype_descriptor(&DataType::Int32), "int32");
        assert_eq!(tabular::dtype_descriptor(&DataType::UInt8), "uint8");
        assert_eq!(tabular::dtype_descriptor(&DataType::Float64), "double");
        assert_eq!(tabular::dtype_descriptor(&DataType::Float32), "float");
        assert_eq!(tabular::dtype_descriptor(&DataType::String), "string");
        assert_eq!(tabular::dtype_descriptor(&DataType::Boolean), "bool");
        assert_eq!(tabular::dtype_descriptor(&DataType::Null), "null");
    }

    #[test]
    fn test_dtype_descriptor_temporal() {
        assert_eq!(
            tabular::dtype_descriptor(&DataType::Datetime(TimeUnit::Microseconds, None)),
            "timestamp[us]"
        );
        assert_eq!(
            tabular::dtype_descriptor(&DataType::Datetime(TimeUnit::Nanoseconds, None)),
            "timestamp[ns]"
        );
        assert_eq!(
            tabular::dtype_descriptor(&DataType::Duration(TimeUnit::Milliseconds)),
            "duration[ms]"
        );
        assert_eq!(tabular::dtype_descriptor(&DataType::Date), "date32[day]");
    }

    #[test]
    fn test_dtype_descriptor_list() {
        let dtype = DataType::List(Box::new(DataType::Int64));
        assert_eq!(tabular::dtype_descriptor(&dtype), "list<item: int64>");
    }

    #[test]
    fn test_read_schema_parquet_keeps_column_order() -> Result<(), SchemaDiffError> {
        test::run_empty_dir_test(|dir| {
            let path = dir.join("yellow_tripdata_2019-01.parquet");
            let mut df = df!(
                "VendorID" => &[1i64, 2],
                "passenger_count" => &[1i32, 3],
                "store_and_fwd_flag" => &["N", "Y"],
                "fare_amount" => &[7.5f64, 12.0],
            )?;
            tabular::write_df_parquet(&mut df, &path)?;

            let schema = tabular::read_schema(&path)?;

            assert_eq!(schema.name.as_deref(), Some("yellow_tripdata_2019-01"));
            assert_eq!(
                schema.fields,
                vec![
                    Field::new("VendorID", "int64"),
                    Field::new("passenger_count", "int32"),
                    Field::new("store_and_fwd_flag", "string"),
                    Field::new("fare_amount", "double"),
                ]
            );
            Ok(())
        })
    }

    #[test]
    fn test_read_schema_csv() -> Result<(), SchemaDiffError> {
        test::run_empty_dir_test(|dir| {
            let path = dir.join("zones.csv");
            let mut df = df!(
                "LocationID" => &[1i64, 2],
                "Zone" => &["Newark Airport", "Jamaica Bay"],
            )?;
            tabular::write_df_csv(&mut df, &path, b',')?;

            let schema = tabular::read_schema(&path)?;
            assert_eq!(
                schema.fields,
                vec![
                    Field::new("LocationID", "int64"),
                    Field::new("Zone", "string"),
                ]
            );
            Ok(())
        })
    }

    #[test]
    fn test_read_schema_missing_file() {
        let result = tabular::read_schema("data/test/does_not_exist.parquet");
        assert!(matches!(result, Err(SchemaDiffError::LoaderFailure(_))));
    }

    #[test]
    fn test_read_schema_unknown_extension() -> Result<(), SchemaDiffError> {
        test::run_empty_dir_test(|dir| {
            let path = dir.join("notes.txt");
            std::fs::write(&path, "not a table")?;

            let result = tabular::read_schema(&path);
            assert!(matches!(result, Err(SchemaDiffError::LoaderFailure(_))));
            Ok(())
        })
    }

    #[test]
    fn test_read_schema_corrupt_parquet() -> Result<(), SchemaDiffError> {
        test::run_empty_dir_test(|dir| {
            let path = dir.join("broken.parquet");
            std::fs::write(&path, "definitely not parquet")?;

            let result = tabular::read_schema(&path);
            assert!(matches!(result, Err(SchemaDiffError::LoaderFailure(_))));
            Ok(())
        })
    }
}
