use crate::error::{RadlError, Result};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Load a GeoJSON FeatureCollection from a UTF-8 encoded file
///
/// Reads and parses the whole file, then validates the top-level `type`.
/// Everything beyond the `type` check (feature entries, geometry, CRS,
/// foreign document keys) is taken as-is; the transformation stage decides
/// what to do with it.
///
/// # Errors
/// * [`RadlError::Io`] - the file cannot be read
/// * [`RadlError::Json`] - the file is not valid JSON
/// * [`RadlError::NotAFeatureCollection`] - the top-level `type` is missing
///   or is not `"FeatureCollection"`
pub fn load_collection(path: &Path) -> Result<JsonValue> {
    let text = fs::read_to_string(path)?;
    let doc: JsonValue = serde_json::from_str(&text)?;
    parse_collection(doc)
}

/// Validate an already-parsed JSON document as a FeatureCollection
///
/// Split out from [`load_collection`] so the check is testable without
/// touching the filesystem.
pub fn parse_collection(doc: JsonValue) -> Result<JsonValue> {
    match doc.get("type").and_then(JsonValue::as_str) {
        Some("FeatureCollection") => Ok(doc),
        _ => {
            let found = match doc.get("type") {
                Some(value) => value.to_string(),
                None => "nothing".to_string(),
            };
            Err(RadlError::NotAFeatureCollection { found })
        }
    }
}

/// Write a FeatureCollection document to a file
///
/// Serializes compactly by default (pretty-printed when `pretty` is set),
/// creating parent directories as needed. The document is serialized to a
/// string before the file is opened, so a serialization failure never leaves
/// a partial file behind.
pub fn write_collection(path: &Path, doc: &JsonValue, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_collection_accepts_feature_collection() {
        let doc = json!({
            "type": "FeatureCollection",
            "name": "IST_RadlVorrangNetz",
            "features": []
        });

        let parsed = parse_collection(doc).unwrap();
        assert_eq!(parsed["name"].as_str(), Some("IST_RadlVorrangNetz"));
    }

    #[test]
    fn test_parse_collection_rejects_wrong_type() {
        let doc = json!({
            "type": "Feature",
            "geometry": null,
            "properties": {}
        });

        let err = parse_collection(doc).unwrap_err();
        match err {
            RadlError::NotAFeatureCollection { found } => {
                assert_eq!(found, "\"Feature\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_collection_rejects_missing_type() {
        let doc = json!({ "features": [] });

        let err = parse_collection(doc).unwrap_err();
        match err {
            RadlError::NotAFeatureCollection { found } => {
                assert_eq!(found, "nothing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_collection_rejects_non_string_type() {
        let doc = json!({ "type": 42, "features": [] });

        let err = parse_collection(doc).unwrap_err();
        match err {
            RadlError::NotAFeatureCollection { found } => {
                assert_eq!(found, "42");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
