use super::{extracted_or_null, FeatureRule, MAPILLARY_LINK_FIELD};
use crate::extract;
use crate::geojson::value::is_empty_value;
use serde_json::{Map, Value as JsonValue};

/// Properties removed from every kept feature
const DROP_FIELDS: [&str; 2] = ["munichways_net_type_plan", "osm_access"];

const MEASURE_CATEGORY_LINK_FIELD: &str = "munichways_measure_category_link";

/// Rule for the consolidated, field-cleaned network export (ALL)
///
/// Drops the broken rows where both `osm_class_bicycle` and `munichways_id`
/// are empty, removes a couple of unused columns, and appends the extracted
/// `mapillary_img_id` and `measure_category` at the end of the properties.
pub struct Consolidated;

impl FeatureRule for Consolidated {
    fn keep(&self, props: &Map<String, JsonValue>) -> bool {
        !(is_empty_value(props.get("osm_class_bicycle"))
            && is_empty_value(props.get("munichways_id")))
    }

    fn apply(&self, props: &mut Map<String, JsonValue>) {
        // shift_remove keeps the surviving columns in their original order
        // (plain remove is a swap_remove under preserve_order).
        for field in DROP_FIELDS {
            props.shift_remove(field);
        }

        let img_id = extract::mapillary_img_id(props.get(MAPILLARY_LINK_FIELD));
        props.insert("mapillary_img_id".to_string(), extracted_or_null(img_id));

        let category = extract::anchor_text(props.get(MEASURE_CATEGORY_LINK_FIELD));
        props.insert("measure_category".to_string(), extracted_or_null(category));
    }
}
