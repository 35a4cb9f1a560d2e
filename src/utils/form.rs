//! Lenient deserializers for HTML-form style payloads.
//!
//! Browsers submit every form control as a string (`"2024"`, `"06"`, `""`),
//! while API clients send proper JSON numbers. Both shapes are accepted and
//! normalized to trimmed text, with blank values treated as absent.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FormValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FormValue {
    fn into_text(self) -> String {
        match self {
            FormValue::Text(s) => s,
            FormValue::Integer(n) => n.to_string(),
            FormValue::Float(f) => f.to_string(),
        }
    }
}

/// Deserialize a string or number into trimmed, non-empty text.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FormValue>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.into_text().trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Normalize an optional query-string value: trimmed, blank means absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
