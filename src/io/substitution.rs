//! Substitution of reduced labels back into tabular records.
//!
//! Records are JSON objects. For a chosen column, each value is replaced by
//! the first reduced label it contains (case-insensitively) and the result
//! is written to a sibling column named `<column>_stripped`.

use serde_json::Value;
use tracing::debug;

use crate::core::errors::{LabelfoldError, Result};

/// Suffix appended to the source column name.
pub const STRIPPED_SUFFIX: &str = "_stripped";

/// Name of the column that receives substituted values.
pub fn stripped_column(column: &str) -> String {
    format!("{column}{STRIPPED_SUFFIX}")
}

/// First reduced label found in `value`, or `value` itself.
///
/// Matching ignores case on both sides. Unlike a plain substring test,
/// where `""` is contained in every value, empty labels never match.
pub fn substitute_value<S: AsRef<str>>(value: &str, reduced: &[S]) -> String {
    let haystack = value.to_lowercase();
    reduced
        .iter()
        .map(|label| label.as_ref())
        .find(|label| !label.is_empty() && haystack.contains(&label.to_lowercase()))
        .unwrap_or(value)
        .to_string()
}

/// Substitute every value in `values`.
pub fn substitute_values<V, S>(values: &[V], reduced: &[S]) -> Vec<String>
where
    V: AsRef<str>,
    S: AsRef<str>,
{
    values
        .iter()
        .map(|value| substitute_value(value.as_ref(), reduced))
        .collect()
}

/// Add `<column>_stripped` to every record.
///
/// Every record must be an object holding a string under `column`. Records
/// are checked before any is modified, so a failure leaves them untouched.
pub fn substitute_column<S: AsRef<str>>(
    records: &mut [Value],
    column: &str,
    reduced: &[S],
) -> Result<()> {
    let substituted = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let cell = record_cell(record, idx, column)?;
            Ok(substitute_value(cell, reduced))
        })
        .collect::<Result<Vec<_>>>()?;

    let target = stripped_column(column);
    let mut replaced = 0usize;
    for (record, value) in records.iter_mut().zip(substituted) {
        if let Value::Object(map) = record {
            if map.get(column).and_then(Value::as_str) != Some(value.as_str()) {
                replaced += 1;
            }
            map.insert(target.clone(), Value::String(value));
        }
    }

    debug!(
        column,
        records = records.len(),
        replaced,
        "Substituted reduced labels"
    );
    Ok(())
}

fn record_cell<'a>(record: &'a Value, idx: usize, column: &str) -> Result<&'a str> {
    let map = record.as_object().ok_or_else(|| {
        LabelfoldError::validation_mismatch(
            "records must be JSON objects",
            format!("records[{idx}]"),
            "object",
            value_kind(record),
        )
    })?;

    let cell = map.get(column).ok_or_else(|| {
        LabelfoldError::validation(format!("record {idx} has no column '{column}'"))
            .with_context(format!("records[{idx}].{column}"))
    })?;

    cell.as_str().ok_or_else(|| {
        LabelfoldError::validation_mismatch(
            format!("column '{column}' must hold strings"),
            format!("records[{idx}].{column}"),
            "string",
            value_kind(cell),
        )
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
