use crate::geojson::value::non_empty_str;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;

// Text between a `target="_blank">` opening tag and the closing `</a>`,
// nested markup excluded.
static ANCHOR_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)_blank">\s*([^<]+?)\s*</a>"#).unwrap());

/// Extract the anchor text from an HTML link snippet
///
/// The dataset's measure-category field holds snippets like
/// `<a href="..." target="_blank">Fahrrad Symbole </a>`; the human-readable
/// category is the anchor text. Only anchors opened with `target="_blank"`
/// (case-insensitive) count, and the first one wins.
///
/// Null, non-string, empty or sentinel input, snippets without a matching
/// anchor, and anchors whose text trims down to nothing all yield `None`.
///
/// # Examples
/// ```
/// use radlnetz::extract::anchor_text;
/// use serde_json::json;
///
/// let snippet = json!("<a href=\"#\" target=\"_blank\"> Fahrrad Symbole </a>");
/// assert_eq!(anchor_text(Some(&snippet)), Some("Fahrrad Symbole".to_string()));
/// ```
pub fn anchor_text(value: Option<&JsonValue>) -> Option<String> {
    let snippet = non_empty_str(value)?;
    let captures = ANCHOR_TEXT_RE.captures(snippet)?;
    let text = captures.get(1)?.as_str().trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_anchor_text() {
        let snippet = json!(r##"<a href="#" target="_blank"> Fahrrad Symbole </a>"##);
        assert_eq!(
            anchor_text(Some(&snippet)),
            Some("Fahrrad Symbole".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_target() {
        let snippet = json!(r##"<a href="#" TARGET="_BLANK">Radweg</a>"##);
        assert_eq!(anchor_text(Some(&snippet)), Some("Radweg".to_string()));
    }

    #[test]
    fn test_first_matching_anchor_wins() {
        let snippet = json!(concat!(
            r##"<a href="#" target="_blank">Erste Kategorie</a> "##,
            r##"<a href="#" target="_blank">Zweite Kategorie</a>"##
        ));
        assert_eq!(
            anchor_text(Some(&snippet)),
            Some("Erste Kategorie".to_string())
        );
    }

    #[test]
    fn test_no_blank_target_anchor() {
        let snippet = json!(r##"<a href="#">Fahrrad Symbole</a>"##);
        assert_eq!(anchor_text(Some(&snippet)), None);
    }

    #[test]
    fn test_whitespace_only_anchor_text() {
        let snippet = json!(r##"<a href="#" target="_blank">   </a>"##);
        assert_eq!(anchor_text(Some(&snippet)), None);
    }

    #[test]
    fn test_tolerates_unusable_input() {
        assert_eq!(anchor_text(Some(&json!(null))), None);
        assert_eq!(anchor_text(Some(&json!(7))), None);
        assert_eq!(anchor_text(Some(&json!("-"))), None);
        assert_eq!(anchor_text(Some(&json!(""))), None);
        assert_eq!(anchor_text(None), None);
    }
}
