//! Dialect stamping for finished documents.

use serde_json::json;

use super::Fragment;

/// Dialect identifier of JSON Schema draft-04.
pub const DRAFT4: &str = "http://json-schema.org/draft-04/schema#";

/// Sets `$schema` on a finished root document.
///
/// Applied once per conversion, to the root only.
pub fn finalize(mut document: Fragment, dialect: &str) -> Fragment {
    document.insert("$schema".to_string(), json!(dialect));
    document
}
