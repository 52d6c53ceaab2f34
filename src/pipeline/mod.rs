/// Per-export transformation rules and the shared pipeline driver
///
/// Every export is the same four steps: load one FeatureCollection, keep the
/// features passing a predicate, rewrite the kept features' properties, and
/// write the result. The steps live in [`crate::geojson::document`] and
/// [`transform_collection`]; only the predicate + mutation pair differs per
/// export:
///
/// - `subset`: token-priority subsets (route / status / target network)
/// - `consolidated`: the cleaned full-network export
/// - `app`: the fixed-schema app export
pub mod app;
pub mod consolidated;
pub mod subset;

// Re-export commonly used items
pub use app::AppSchema;
pub use consolidated::Consolidated;
pub use subset::TokenSubset;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// Property holding the Mapillary link in the source dataset
pub const MAPILLARY_LINK_FIELD: &str = "munichways_mapillary_link";

/// A predicate + mutation pair applied to one feature's properties
///
/// A feature is kept iff [`FeatureRule::keep`] holds; kept features get their
/// properties rewritten by [`FeatureRule::apply`]. Dropped features are
/// excluded from the output entirely, geometry included. Rules never see
/// the geometry.
pub trait FeatureRule {
    /// Whether the feature belongs in the output at all
    fn keep(&self, props: &Map<String, JsonValue>) -> bool;

    /// Rewrite the properties of a kept feature
    fn apply(&self, props: &mut Map<String, JsonValue>);
}

/// Feature counts of one pipeline run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary {
    /// Length of the input `features` array, skipped non-Feature entries included
    pub input_features: usize,
    /// Number of features written to the output
    pub output_features: usize,
}

/// Apply a rule to every feature of a FeatureCollection document
///
/// Walks the `features` array once. Entries whose `type` is not `"Feature"`
/// are skipped silently. For each real feature the properties map (absent or
/// null properties count as an empty map) is handed to the rule; kept
/// features get the mutated map written back, dropped features disappear
/// from the output. Geometry, every other feature key, and every top-level
/// document key other than `features` pass through untouched.
///
/// # Examples
/// ```
/// use radlnetz::pipeline::{transform_collection, Consolidated};
/// use serde_json::json;
///
/// let doc = json!({
///     "type": "FeatureCollection",
///     "features": []
/// });
/// let (out, summary) = transform_collection(doc, &Consolidated);
/// assert_eq!(summary.input_features, 0);
/// assert_eq!(out["type"].as_str(), Some("FeatureCollection"));
/// ```
pub fn transform_collection(
    mut doc: JsonValue,
    rule: &dyn FeatureRule,
) -> (JsonValue, RunSummary) {
    let features = match doc.get_mut("features").map(JsonValue::take) {
        Some(JsonValue::Array(features)) => features,
        _ => Vec::new(),
    };
    let input_features = features.len();

    let mut kept = Vec::with_capacity(features.len());
    for mut feature in features {
        if feature.get("type").and_then(JsonValue::as_str) != Some("Feature") {
            continue;
        }

        let mut props = match feature.get_mut("properties").map(JsonValue::take) {
            Some(JsonValue::Object(map)) => map,
            _ => Map::new(),
        };

        if !rule.keep(&props) {
            continue;
        }

        rule.apply(&mut props);
        feature["properties"] = JsonValue::Object(props);
        kept.push(feature);
    }

    let output_features = kept.len();
    doc["features"] = JsonValue::Array(kept);

    (
        doc,
        RunSummary {
            input_features,
            output_features,
        },
    )
}

/// Convert an extractor result to a JSON property value (null on no match)
pub(crate) fn extracted_or_null(value: Option<String>) -> JsonValue {
    match value {
        Some(text) => JsonValue::String(text),
        None => JsonValue::Null,
    }
}
