use serde_json::Value as JsonValue;

/// Check whether a property value counts as "no value"
///
/// The source dataset marks missing data in several ways: the key is absent,
/// the value is JSON null, the string is empty or whitespace-only, or the
/// string is the sentinel `"-"`. All filtering predicates share this single
/// classification so the scripts cannot drift apart on what "empty" means.
///
/// Non-string scalars (numbers, booleans) are never empty.
///
/// # Examples
/// ```
/// use radlnetz::geojson::value::is_empty_value;
/// use serde_json::json;
///
/// assert!(is_empty_value(None));
/// assert!(is_empty_value(Some(&json!(null))));
/// assert!(is_empty_value(Some(&json!("-"))));
/// assert!(!is_empty_value(Some(&json!("Premium"))));
/// assert!(!is_empty_value(Some(&json!(0))));
/// ```
pub fn is_empty_value(value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => true,
        Some(JsonValue::String(s)) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed == "-"
        }
        Some(_) => false,
    }
}

/// Return the string content of a non-empty property value
///
/// Same classification as [`is_empty_value`], but hands back the original
/// (untrimmed) string when it carries a value. Non-string values yield `None`.
pub fn non_empty_str(value: Option<&JsonValue>) -> Option<&str> {
    match value {
        Some(JsonValue::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "-" {
                None
            } else {
                Some(s.as_str())
            }
        }
        _ => None,
    }
}

/// Split a multi-valued property into its comma-separated tokens
///
/// Tokens are trimmed and empty fragments removed, so `"Premium, ,Standard"`
/// yields `["Premium", "Standard"]`. Non-string input yields no tokens.
pub fn split_tokens(value: Option<&JsonValue>) -> Vec<&str> {
    match value {
        Some(JsonValue::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Resolve a multi-valued property against an ordered allow-list
///
/// Returns the first allow-list entry present in the token set, or `None`
/// when none match. Allow-list order decides the winner, not the order in
/// which tokens appear in the value: with the allow-list
/// `["Premium", "Standard"]`, the input `"Standard, Premium"` resolves to
/// `"Premium"`. Matching is exact after trimming; no case folding.
///
/// # Examples
/// ```
/// use radlnetz::geojson::value::resolve_token;
/// use serde_json::json;
///
/// let allowed = ["Premium", "Standard"];
/// assert_eq!(resolve_token(Some(&json!("Standard, Premium")), &allowed), Some("Premium"));
/// assert_eq!(resolve_token(Some(&json!("Nebennetz")), &allowed), None);
/// ```
pub fn resolve_token<'a>(value: Option<&JsonValue>, allowed: &[&'a str]) -> Option<&'a str> {
    let tokens = split_tokens(value);
    for &candidate in allowed {
        if tokens.iter().any(|&token| token == candidate) {
            return Some(candidate);
        }
    }
    None
}
