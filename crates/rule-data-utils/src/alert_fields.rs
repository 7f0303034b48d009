//! Alert field descriptors.
//!
//! The alert field catalogue is maintained in a spreadsheet and exported as a
//! JSON array of rows keyed by column title. This module checks that the
//! export still has the columns this code expects, then normalizes each row
//! into an [`AlertFieldDescriptor`].
//!
//! The shape check only covers the columns used here; any other columns in
//! the export are ignored.

use once_cell::sync::Lazy;
use schema_lib::{
    ArrayValidator, ObjectValidator, OneOfValidator, SchemaError, ValidatorExt, array, literal,
    one_of, string,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const SIGNAL_FIELDS: &str = "Signal field(s)";
const ALERTS_AS_DATA_FIELDS: &str = "Alerts-as-Data Field(s)";
const REQUIRED: &str = "Required for all rule types";
const RECOMMENDED: &str = "Required for Security, Recommended for all rule types";
const OPTIONAL: &str = "Optional";
const PROPOSED: &str = "Proposed (beyond 7.15)";
const DEFINITION: &str = "AAD field definition";

/// Field name used in the spreadsheet for rows that have no alert field.
const NO_FIELD: &str = "None";

/// How strongly a field is expected to be present on an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLevel {
    /// Required for all rule types
    Required,
    /// Required for Security, recommended for all other rule types
    Recommended,
    /// Present when available
    Optional,
    /// Proposed but not implemented yet
    Proposed,
}

/// A normalized row of the alert fields spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFieldDescriptor {
    /// The equivalent field (or fieldset) in the Security signal index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_index_field_or_fieldset_equivalent: Option<String>,

    /// The name of the field or fieldset
    pub field_or_field_set: String,

    pub level: FieldLevel,

    /// A multi-line English description of the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A row of the alert fields spreadsheet as exported.
///
/// The level columns hold `""`, `"yes"` or `"Yes"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlertFieldSpreadsheetRow {
    #[serde(rename = "Signal field(s)")]
    pub signal_fields: String,

    #[serde(rename = "Alerts-as-Data Field(s)")]
    pub alerts_as_data_fields: String,

    #[serde(rename = "Required for all rule types")]
    pub required: String,

    #[serde(rename = "Required for Security, Recommended for all rule types")]
    pub recommended: String,

    #[serde(rename = "Optional")]
    pub optional: String,

    #[serde(rename = "Proposed (beyond 7.15)")]
    pub proposed: String,

    #[serde(rename = "AAD field definition")]
    pub definition: String,
}

impl AlertFieldSpreadsheetRow {
    /// The level marked on this row. When several are marked the strongest
    /// wins, with proposed ranked above optional.
    pub fn level(&self) -> Option<FieldLevel> {
        [
            (&self.required, FieldLevel::Required),
            (&self.recommended, FieldLevel::Recommended),
            (&self.proposed, FieldLevel::Proposed),
            (&self.optional, FieldLevel::Optional),
        ]
        .into_iter()
        .find(|(marker, _)| !marker.is_empty())
        .map(|(_, level)| level)
    }
}

/// Errors produced while reading the spreadsheet export
#[derive(Debug, Error)]
pub enum AlertFieldError {
    /// The export's structure no longer matches what this code expects
    #[error("invalid data: {0}")]
    InvalidFormat(#[from] SchemaError),

    /// A row has an empty alert field name
    #[error("missing Alerts-as-Data Field(s) in row {index}")]
    MissingField { index: usize },

    /// A row has none of the level columns marked
    #[error(
        "missing one of:\n* Required for all rule types\n* Required for Security, Recommended for all rule types\n* Optional\n* Proposed (beyond 7.15)\n\nin:\n{row}\n"
    )]
    MissingLevel { row: String },
}

/// Accepts `""`, `"yes"` or `"Yes"`.
fn yes_or_empty() -> OneOfValidator {
    one_of(vec![
        literal("").boxed(),
        literal("yes").boxed(),
        literal("Yes").boxed(),
    ])
}

/// The export format this code understands. If this fails, the spreadsheet's
/// columns changed and this module needs updating.
static CURRENT_FORMAT: Lazy<ArrayValidator<ObjectValidator>> = Lazy::new(|| {
    array(
        ObjectValidator::new()
            .field(SIGNAL_FIELDS, string())
            .field(ALERTS_AS_DATA_FIELDS, string())
            .field(REQUIRED, yes_or_empty())
            .field(RECOMMENDED, yes_or_empty())
            .field(OPTIONAL, yes_or_empty())
            .field(PROPOSED, yes_or_empty())
            .field(DEFINITION, string()),
    )
});

/// Validate and normalize the rows of an alert fields spreadsheet export.
///
/// Rows whose field name is `None` are skipped. Empty signal fields and
/// definitions become `None` in the descriptor.
pub fn alert_field_descriptors_from_rows(
    rows: &Value,
) -> Result<Vec<AlertFieldDescriptor>, AlertFieldError> {
    let parsed: Vec<AlertFieldSpreadsheetRow> = CURRENT_FORMAT.narrow(rows)?;
    let raw_rows = rows.as_array().map(Vec::as_slice).unwrap_or_default();

    let mut descriptors = Vec::with_capacity(parsed.len());
    for (index, (row, raw)) in parsed.into_iter().zip(raw_rows).enumerate() {
        if row.alerts_as_data_fields == NO_FIELD {
            tracing::debug!(index, "skipping row without an alert field");
            continue;
        }
        if row.alerts_as_data_fields.is_empty() {
            return Err(AlertFieldError::MissingField { index });
        }
        let Some(level) = row.level() else {
            return Err(AlertFieldError::MissingLevel {
                row: raw.to_string(),
            });
        };

        descriptors.push(AlertFieldDescriptor {
            signal_index_field_or_fieldset_equivalent: non_empty(row.signal_fields),
            field_or_field_set: row.alerts_as_data_fields,
            level,
            description: non_empty(row.definition),
        });
    }

    tracing::debug!(
        rows = raw_rows.len(),
        descriptors = descriptors.len(),
        "parsed alert field spreadsheet"
    );
    Ok(descriptors)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(field: &str, required: &str, recommended: &str, optional: &str, proposed: &str) -> Value {
        json!({
            "Signal field(s)": "signal.rule.name",
            "Alerts-as-Data Field(s)": field,
            "Required for all rule types": required,
            "Required for Security, Recommended for all rule types": recommended,
            "Optional": optional,
            "Proposed (beyond 7.15)": proposed,
            "AAD field definition": "The rule name",
            "Notes": 7
        })
    }

    #[test]
    fn test_parses_valid_rows() {
        let rows = json!([
            row("kibana.alert.rule.name", "yes", "", "", ""),
            row("kibana.alert.severity", "", "Yes", "", ""),
        ]);
        let descriptors = alert_field_descriptors_from_rows(&rows).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(
            descriptors[0],
            AlertFieldDescriptor {
                signal_index_field_or_fieldset_equivalent: Some("signal.rule.name".to_string()),
                field_or_field_set: "kibana.alert.rule.name".to_string(),
                level: FieldLevel::Required,
                description: Some("The rule name".to_string()),
            }
        );
        assert_eq!(descriptors[1].level, FieldLevel::Recommended);
    }

    #[test]
    fn test_level_precedence() {
        let rows = json!([
            row("a", "yes", "yes", "yes", "yes"),
            row("b", "", "yes", "yes", "yes"),
            row("c", "", "", "yes", "yes"),
            row("d", "", "", "yes", ""),
        ]);
        let levels: Vec<FieldLevel> = alert_field_descriptors_from_rows(&rows)
            .unwrap()
            .into_iter()
            .map(|descriptor| descriptor.level)
            .collect();
        assert_eq!(
            levels,
            vec![
                FieldLevel::Required,
                FieldLevel::Recommended,
                FieldLevel::Proposed,
                FieldLevel::Optional,
            ]
        );
    }

    #[test]
    fn test_skips_rows_without_field() {
        let rows = json!([row("None", "", "", "", ""), row("x", "", "", "yes", "")]);
        let descriptors = alert_field_descriptors_from_rows(&rows).unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].field_or_field_set, "x");
    }

    #[test]
    fn test_empty_strings_become_none() {
        let mut value = row("x", "yes", "", "", "");
        value["Signal field(s)"] = json!("");
        value["AAD field definition"] = json!("");
        let descriptors = alert_field_descriptors_from_rows(&json!([value])).unwrap();
        assert_eq!(descriptors[0].signal_index_field_or_fieldset_equivalent, None);
        assert_eq!(descriptors[0].description, None);

        let serialized = serde_json::to_value(&descriptors[0]).unwrap();
        assert_eq!(
            serialized,
            json!({"fieldOrFieldSet": "x", "level": "required"})
        );
    }

    #[test]
    fn test_missing_field_name() {
        let rows = json!([row("x", "yes", "", "", ""), row("", "yes", "", "", "")]);
        let err = alert_field_descriptors_from_rows(&rows).unwrap_err();
        assert!(matches!(err, AlertFieldError::MissingField { index: 1 }));
        assert_eq!(err.to_string(), "missing Alerts-as-Data Field(s) in row 1");
    }

    #[test]
    fn test_missing_level() {
        let rows = json!([row("x", "", "", "", "")]);
        let err = alert_field_descriptors_from_rows(&rows).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("missing one of:\n* Required for all rule types\n"));
        assert!(message.contains("\"Alerts-as-Data Field(s)\":\"x\""));
    }

    #[test]
    fn test_invalid_format_embeds_explanation() {
        let mut bad = row("x", "no", "", "", "");
        bad.as_object_mut().unwrap().remove("AAD field definition");
        let rows = json!([row("y", "yes", "", "", ""), bad]);

        let err = alert_field_descriptors_from_rows(&rows).unwrap_err();
        let AlertFieldError::InvalidFormat(schema_error) = &err else {
            panic!("expected InvalidFormat, got {err:?}");
        };
        let explanation = schema_error.explanation().unwrap();
        assert!(explanation.contains("Value at index 1"));
        assert!(explanation.contains("Value at key \"Required for all rule types\""));
        assert!(explanation.contains("Value at key \"AAD field definition\""));
        assert!(!explanation.contains("Value at index 0"));
        assert!(err.to_string().starts_with("invalid data: Values in array were invalid."));
    }

    #[test]
    fn test_rejects_non_array_export() {
        let err = alert_field_descriptors_from_rows(&json!({"rows": []})).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid data: Expected an array, received {"rows":[]}"#
        );
    }

    #[test]
    fn test_empty_export() {
        assert!(alert_field_descriptors_from_rows(&json!([])).unwrap().is_empty());
    }
}
