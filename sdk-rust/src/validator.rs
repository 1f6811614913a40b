use crate::{
    errors::{EMPTY_RESPONSE, MALFORMED_RESPONSE, MISSING_FIELDS},
    AdviceError, AdviceResult, ApiResult, Mood, Resource,
};
use serde_json::{Map, Value};

/// Turns the raw model reply into an [`ApiResult`].
///
/// Content problems are always reported as [`AdviceError::InvalidResponse`].
/// The result depends only on `mood` and `raw`.
pub fn validate_response(mood: Mood, raw: &str) -> AdviceResult<ApiResult> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AdviceError::invalid_response(EMPTY_RESPONSE));
    }

    let parsed: Value = serde_json::from_str(text).map_err(|error| {
        tracing::error!(%error, raw = text, "Failed to parse JSON response");
        AdviceError::invalid_response(MALFORMED_RESPONSE)
    })?;

    let fields = parsed.as_object();
    let advice = fields.and_then(|f| truthy_text(f, "advice"));
    let quote = fields.and_then(|f| truthy_text(f, "quote"));

    let (Some(advice), Some(quote)) = (advice, quote) else {
        tracing::error!(parsed = %parsed, "Invalid response structure from API");
        return Err(AdviceError::invalid_response(MISSING_FIELDS));
    };

    let resources = fields.and_then(|f| extract_resources(mood, f));

    Ok(ApiResult {
        advice,
        quote,
        resources,
    })
}

fn extract_resources(mood: Mood, fields: &Map<String, Value>) -> Option<Vec<Resource>> {
    if !mood.allows_resources() || fields.get("showResources") != Some(&Value::Bool(true)) {
        return None;
    }

    let raw = fields.get("resources").filter(|value| value.is_array())?;
    match serde_json::from_value(raw.clone()) {
        Ok(resources) => Some(resources),
        Err(error) => {
            tracing::warn!(%error, resources = %raw, "Dropping malformed resources list");
            None
        }
    }
}

/// Reads a field that must be present and truthy, rendering it as text.
fn truthy_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        value if is_truthy(value) => Some(value.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_loose_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn non_string_truthy_fields_are_rendered_as_text() {
        let fields = json!({ "advice": 42 });
        let fields = fields.as_object().unwrap();
        assert_eq!(truthy_text(fields, "advice").as_deref(), Some("42"));
        assert_eq!(truthy_text(fields, "quote"), None);
    }
}
