//! Rendering of parse results for the terminal.

use anyhow::Result;
use rule_data_utils::AlertFieldDescriptor;
use schema_lib::{InstancePath, PathSegment, SchemaError};

/// Pretty JSON for the normalized descriptors.
pub fn descriptors_json(descriptors: &[AlertFieldDescriptor]) -> Result<String> {
    Ok(serde_json::to_string_pretty(descriptors)?)
}

/// Pretty JSON for the leaf diagnostics of a shape error.
pub fn shape_error_json(error: &SchemaError) -> Result<String> {
    Ok(serde_json::to_string_pretty(error.diagnostics())?)
}

/// A tidy text report for a shape error: a title, the full explanation, and
/// one bullet per failing location.
pub fn shape_error_text(error: &SchemaError) -> String {
    let mut out = String::from("Error: alert field export has an unexpected shape\n\n");

    if let Some(explanation) = error.explanation() {
        out.push_str("Problem: ");
        out.push_str(explanation);
        out.push_str("\n\n");
    } else {
        out.push_str(&format!("Problem: {}\n\n", error));
    }

    let diagnostics = error.diagnostics();
    if !diagnostics.is_empty() {
        for diagnostic in diagnostics {
            out.push_str(&format!(
                "  ✖ At `{}`: {}\n",
                display_path(&diagnostic.path),
                diagnostic.kind
            ));
        }
        out.push('\n');
    }

    out
}

fn display_path(segments: &[PathSegment]) -> String {
    let mut path = InstancePath::new();
    for segment in segments {
        match segment {
            PathSegment::Key(key) => path.push_key(key.as_str()),
            PathSegment::Index(index) => path.push_index(*index),
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_data_utils::FieldLevel;
    use schema_lib::{ValidatorExt, array, literal, object, one_of, string};
    use serde_json::json;

    fn shape_error() -> SchemaError {
        let validator = array(object([
            ("field", string().boxed()),
            (
                "direction",
                one_of(vec![literal("asc").boxed(), literal("desc").boxed()]).boxed(),
            ),
        ]));
        validator
            .check(&json!([{"field": "a", "direction": "asc"}, {"field": 1}]))
            .unwrap_err()
    }

    #[test]
    fn test_shape_error_text() {
        let text = shape_error_text(&shape_error());
        assert!(text.starts_with("Error: alert field export has an unexpected shape\n\nProblem: "));
        assert!(text.contains("Value at index 1"));
        assert!(text.contains("  ✖ At `[1].field`: type-mismatch\n"));
        assert!(text.contains("  ✖ At `[1].direction`: no-matching-branch\n"));
    }

    #[test]
    fn test_shape_error_json() {
        let rendered = shape_error_json(&shape_error()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["kind"], "type-mismatch");
        assert_eq!(
            parsed[0]["path"],
            json!([{"type": "Index", "value": 1}, {"type": "Key", "value": "field"}])
        );
    }

    #[test]
    fn test_descriptors_json() {
        let descriptors = vec![AlertFieldDescriptor {
            signal_index_field_or_fieldset_equivalent: None,
            field_or_field_set: "kibana.alert.uuid".to_string(),
            level: FieldLevel::Required,
            description: None,
        }];
        let rendered = descriptors_json(&descriptors).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed,
            json!([{"fieldOrFieldSet": "kibana.alert.uuid", "level": "required"}])
        );
    }

    #[test]
    fn test_display_path_root() {
        assert_eq!(display_path(&[]), "(root)");
    }
}
