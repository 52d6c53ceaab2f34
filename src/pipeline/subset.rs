use super::{extracted_or_null, FeatureRule, MAPILLARY_LINK_FIELD};
use crate::extract;
use crate::geojson::value::resolve_token;
use serde_json::{Map, Value as JsonValue};

/// Declarative rule for the token-priority subset exports
///
/// Covers the route (NUR), implementation-status and target-network (ZIEL)
/// exports, which only differ in which multi-valued property they filter on
/// and which allow-list resolves it. A feature is kept when its `field`
/// resolves against `allowed`; the field is then overwritten with the single
/// resolved token, so downstream consumers never see the raw comma-separated
/// value.
pub struct TokenSubset {
    /// Property to filter on and overwrite
    pub field: &'static str,
    /// Priority-ordered allow-list the field is resolved against
    pub allowed: &'static [&'static str],
    /// Whether to append the extracted `mapillary_img_id`
    pub add_mapillary_id: bool,
}

impl FeatureRule for TokenSubset {
    fn keep(&self, props: &Map<String, JsonValue>) -> bool {
        resolve_token(props.get(self.field), self.allowed).is_some()
    }

    fn apply(&self, props: &mut Map<String, JsonValue>) {
        if let Some(winner) = resolve_token(props.get(self.field), self.allowed) {
            props.insert(
                self.field.to_string(),
                JsonValue::String(winner.to_string()),
            );
        }

        if self.add_mapillary_id {
            let img_id = extract::mapillary_img_id(props.get(MAPILLARY_LINK_FIELD));
            props.insert("mapillary_img_id".to_string(), extracted_or_null(img_id));
        }
    }
}
