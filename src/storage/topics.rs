//! Encoding of a class's training-topic list.
//!
//! The list lives in the `classes.trainings` text column as a JSON array of
//! strings, e.g. `["Poomsae 1","Kyorugi"]`. Order is significant and kept.
//! An absent, empty or blank column decodes to an empty list.

use serde_json::Value;

/// Serialize topics for storage.
#[must_use]
pub fn encode(topics: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(topics).unwrap_or_else(|_| "[]".to_string())
}

/// Deserialize a stored topic list.
///
/// # Errors
///
/// Returns a description of the problem when the text is neither blank nor a
/// JSON array of strings.
pub fn decode(raw: Option<&str>) -> Result<Vec<String>, String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Value>(raw).map_err(|err| err.to_string())? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(format!("expected a string topic, found {other}")),
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        other => Err(format!("expected a JSON array, found {other}")),
    }
}

/// Clean topic drafts before saving: trim each one and drop blanks.
#[must_use]
pub fn normalize<I, S>(drafts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    drafts
        .into_iter()
        .map(|draft| draft.as_ref().trim().to_string())
        .filter(|topic| !topic.is_empty())
        .collect()
}
