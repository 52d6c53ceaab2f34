use crate::geojson::value::non_empty_str;
use serde_json::Value as JsonValue;

/// Extract the Mapillary image id (`pKey`) from a Mapillary link
///
/// The dataset stores links such as
/// `https://www.mapillary.com/app/?pKey=1713341692468300`; the image id is
/// the value of the `pKey` query parameter. The exact spelling `pKey` is
/// looked up first, then the lowercase variant `pkey` seen in older rows.
///
/// Any unusable input (null, non-string, empty, the `"-"` sentinel, a link
/// without a query string, a missing or blank parameter) yields `None`;
/// nothing in here is an error.
///
/// # Examples
/// ```
/// use radlnetz::extract::mapillary_img_id;
/// use serde_json::json;
///
/// let link = json!("https://www.mapillary.com/app/?pKey=1713341692468300");
/// assert_eq!(mapillary_img_id(Some(&link)), Some("1713341692468300".to_string()));
/// assert_eq!(mapillary_img_id(Some(&json!("-"))), None);
/// ```
pub fn mapillary_img_id(value: Option<&JsonValue>) -> Option<String> {
    let link = non_empty_str(value)?.trim();

    // Query string is everything between '?' and an optional '#' fragment.
    let query = link.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or("");

    query_param(query, "pKey").or_else(|| query_param(query, "pkey"))
}

/// Look up a query parameter by exact name, first non-blank occurrence wins
fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != name {
            return None;
        }
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_pkey() {
        let link = json!("https://www.mapillary.com/app/?pKey=1713341692468300");
        assert_eq!(
            mapillary_img_id(Some(&link)),
            Some("1713341692468300".to_string())
        );
    }

    #[test]
    fn test_extracts_pkey_among_other_parameters() {
        let link = json!("https://www.mapillary.com/app/?lat=48.1&pKey=42&zoom=17");
        assert_eq!(mapillary_img_id(Some(&link)), Some("42".to_string()));
    }

    #[test]
    fn test_lowercase_pkey_fallback() {
        let link = json!("https://x/?pkey=5");
        assert_eq!(mapillary_img_id(Some(&link)), Some("5".to_string()));
    }

    #[test]
    fn test_pkey_spelling_checked_before_lowercase() {
        let link = json!("https://x/?pkey=1&pKey=2");
        assert_eq!(mapillary_img_id(Some(&link)), Some("2".to_string()));
    }

    #[test]
    fn test_fragment_is_not_part_of_the_query() {
        let link = json!("https://www.mapillary.com/app/?pKey=99#section");
        assert_eq!(mapillary_img_id(Some(&link)), Some("99".to_string()));
    }

    #[test]
    fn test_sentinel_and_empty_input() {
        assert_eq!(mapillary_img_id(Some(&json!("-"))), None);
        assert_eq!(mapillary_img_id(Some(&json!(""))), None);
        assert_eq!(mapillary_img_id(Some(&json!("   "))), None);
        assert_eq!(mapillary_img_id(Some(&json!(null))), None);
        assert_eq!(mapillary_img_id(None), None);
    }

    #[test]
    fn test_non_string_input_is_tolerated() {
        assert_eq!(mapillary_img_id(Some(&json!(12345))), None);
        assert_eq!(mapillary_img_id(Some(&json!(["x"]))), None);
    }

    #[test]
    fn test_missing_or_blank_parameter() {
        assert_eq!(
            mapillary_img_id(Some(&json!("https://www.mapillary.com/app/"))),
            None
        );
        assert_eq!(
            mapillary_img_id(Some(&json!("https://www.mapillary.com/app/?lat=48.1"))),
            None
        );
        assert_eq!(
            mapillary_img_id(Some(&json!("https://www.mapillary.com/app/?pKey="))),
            None
        );
    }
}
