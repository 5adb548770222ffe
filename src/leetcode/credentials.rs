use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::ClassifierError;

/// Parse a JSON object of `header name -> value` into request headers.
pub fn parse_headers(raw: &str) -> Result<HeaderMap, ClassifierError> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|err| ClassifierError::Credentials(format!("invalid JSON: {err}")))?;
    let Value::Object(entries) = parsed else {
        return Err(ClassifierError::Credentials(
            "expected a JSON object of header names to values".to_string(),
        ));
    };

    let mut headers = HeaderMap::with_capacity(entries.len());
    for (name, value) in entries {
        let Value::String(value) = value else {
            return Err(ClassifierError::Credentials(format!(
                "header `{name}` must map to a string"
            )));
        };
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClassifierError::Credentials(format!("invalid header name `{name}`")))?;
        let mut header_value = HeaderValue::from_str(&value).map_err(|_| {
            ClassifierError::Credentials(format!("invalid value for header `{name}`"))
        })?;
        header_value.set_sensitive(true);
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

pub fn load_headers(path: &Path) -> Result<HeaderMap, ClassifierError> {
    let raw = fs::read_to_string(path).map_err(|err| {
        ClassifierError::Credentials(format!("failed to read {}: {err}", path.display()))
    })?;
    let headers = parse_headers(&raw)?;
    tracing::debug!(
        path = %path.display(),
        count = headers.len(),
        "loaded credential headers"
    );
    Ok(headers)
}
