// Rule and alert data utilities
//
// This crate turns rows exported from the alert fields spreadsheet into
// normalized alert field descriptors, checking the export's shape first.

pub mod alert_fields;

pub use alert_fields::{
    AlertFieldDescriptor, AlertFieldError, AlertFieldSpreadsheetRow, FieldLevel,
    alert_field_descriptors_from_rows,
};
