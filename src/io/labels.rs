//! Label list parsing.
//!
//! Labels arrive either as plain text (one per line) or as a JSON / YAML
//! sequence of strings. Structured inputs are checked element by element so
//! that a stray number or object is reported with its position instead of
//! being coerced.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{LabelfoldError, Result};

/// Supported label list encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// One label per non-blank line
    Lines,
    /// JSON array of strings
    Json,
    /// YAML sequence of strings
    Yaml,
}

impl LabelFormat {
    /// Infer the format from a file extension, defaulting to [`LabelFormat::Lines`].
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yml" | "yaml") => Self::Yaml,
            _ => Self::Lines,
        }
    }
}

/// Parse labels from `content`.
pub fn parse_labels(content: &str, format: LabelFormat) -> Result<Vec<String>> {
    match format {
        LabelFormat::Lines => Ok(parse_lines(content)),
        LabelFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            json_labels(&value)
        }
        LabelFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)?;
            yaml_labels(&value)
        }
    }
}

/// Read and parse a label file, inferring the format from its extension.
pub fn read_labels(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LabelfoldError::io(format!("Failed to read labels: {}", path.display()), e)
    })?;
    parse_labels(&content, LabelFormat::from_path(path))
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn json_labels(value: &serde_json::Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        LabelfoldError::validation_mismatch(
            "label input must be an array of strings",
            "labels",
            "array",
            json_type_name(value),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                LabelfoldError::validation_mismatch(
                    "every label must be a string",
                    format!("labels[{idx}]"),
                    "string",
                    json_type_name(item),
                )
            })
        })
        .collect()
}

fn yaml_labels(value: &serde_yaml::Value) -> Result<Vec<String>> {
    let items = value.as_sequence().ok_or_else(|| {
        LabelfoldError::validation_mismatch(
            "label input must be a sequence of strings",
            "labels",
            "sequence",
            yaml_type_name(value),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                LabelfoldError::validation_mismatch(
                    "every label must be a string",
                    format!("labels[{idx}]"),
                    "string",
                    yaml_type_name(item),
                )
            })
        })
        .collect()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}
