use super::{FeatureRule, MAPILLARY_LINK_FIELD};
use crate::extract;
use crate::geojson::value::{is_empty_value, non_empty_str};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value as JsonValue};

/// Image shown when a feature has no usable Mapillary link
pub const DEFAULT_MAPILLARY_ID: &str = "211265577336913";

const DEFAULT_MEASURE_LINK: &str = "<a href=\"https://www.munichways.de/infrastruktur-elemente/\" target=\"_blank\">alle Infrastruktur-Elemente </a>";

const DEFAULT_ROUTE_LINK: &str = "<a href=\"https://www.munichways.de/unsere-radlvorrang-strecken/\" target=\"_blank\">-n/a-Alle-Wege </a>";

/// Rule for the fixed-schema app export
///
/// Unlike the subset exports this does not annotate the existing properties:
/// it replaces them wholesale with the 19-column schema the app consumes,
/// derived column by column from the source properties. Features colored
/// `"blue"` are excluded. Geometry and CRS ride through unchanged, as
/// everywhere else.
pub struct AppSchema {
    /// Stamped once per run, not per feature
    last_updated: String,
}

impl AppSchema {
    pub fn new() -> Self {
        Self {
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

impl Default for AppSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureRule for AppSchema {
    fn keep(&self, props: &Map<String, JsonValue>) -> bool {
        props.get("color").and_then(JsonValue::as_str) != Some("blue")
    }

    fn apply(&self, props: &mut Map<String, JsonValue>) {
        // Ordered column build; insertion order is the app's column order.
        let mut out = Map::new();

        out.insert("cartodb_id".to_string(), json!(0));
        out.insert(
            "name".to_string(),
            coalesce(props, &["osm_name", "munichways_name", "osm_surface"]),
        );
        out.insert("strecke".to_string(), JsonValue::Null);
        out.insert(
            "MW_RV_Strecke".to_string(),
            string_or(props.get("munichways_mw_rv_route"), "-"),
        );
        out.insert(
            "ist_situation".to_string(),
            JsonValue::String(ist_situation(props)),
        );
        out.insert(
            "happy_bike_level".to_string(),
            JsonValue::String(happy_bike_level(props.get("osm_class_bicycle"))),
        );
        out.insert(
            "soll_massnahmen".to_string(),
            passthrough(props, "munichways_target"),
        );
        out.insert(
            "massnahmen_kategorie_link".to_string(),
            string_or(
                props.get("munichways_measure_category_link"),
                DEFAULT_MEASURE_LINK,
            ),
        );
        out.insert(
            "beschreibung".to_string(),
            passthrough(props, "munichways_description"),
        );
        out.insert("munichways_id".to_string(), passthrough(props, "munichways_id"));
        out.insert(
            "status_umsetzung".to_string(),
            passthrough(props, "munichways_status_implementation"),
        );
        out.insert("links".to_string(), passthrough(props, "munichways_links"));
        out.insert(
            "farbe".to_string(),
            JsonValue::String(farbe(props.get("color")).to_string()),
        );
        out.insert(
            "mapillary_img_id".to_string(),
            JsonValue::String(
                extract::mapillary_img_id(props.get(MAPILLARY_LINK_FIELD))
                    .unwrap_or_else(|| DEFAULT_MAPILLARY_ID.to_string()),
            ),
        );
        out.insert("bezirk_nummer".to_string(), JsonValue::Null);
        out.insert("bezirk_name".to_string(), JsonValue::Null);
        out.insert("netztyp_id".to_string(), json!(4));
        out.insert(
            "strecken_link".to_string(),
            string_or(props.get("munichways_route_link"), DEFAULT_ROUTE_LINK),
        );
        out.insert(
            "last_updated".to_string(),
            JsonValue::String(self.last_updated.clone()),
        );

        *props = out;
    }
}

/// First non-empty value among `fields`, null when all are empty
fn coalesce(props: &Map<String, JsonValue>, fields: &[&str]) -> JsonValue {
    for field in fields {
        let value = props.get(*field);
        if !is_empty_value(value) {
            if let Some(value) = value {
                return value.clone();
            }
        }
    }
    JsonValue::Null
}

/// Non-empty string value, or the given default
fn string_or(value: Option<&JsonValue>, default: &str) -> JsonValue {
    match non_empty_str(value) {
        Some(text) => JsonValue::String(text.to_string()),
        None => JsonValue::String(default.to_string()),
    }
}

/// Raw value copied over, null when absent
fn passthrough(props: &Map<String, JsonValue>, field: &str) -> JsonValue {
    props.get(field).cloned().unwrap_or(JsonValue::Null)
}

/// Current-situation text: editorial text when present, else a synthesized
/// sentence from the OSM attributes
///
/// The template is emitted even when all three interpolated attributes are
/// blank, yielding a sentence with empty segments. That matches the upstream
/// data product and is deliberately left uncorrected.
fn ist_situation(props: &Map<String, JsonValue>) -> String {
    if let Some(current) = non_empty_str(props.get("munichways_current")) {
        return current.to_string();
    }

    format!(
        "Oberfläche: {}, Ebenheit: {}, Straßentyp: {}",
        raw_str(props.get("osm_surface")),
        raw_str(props.get("osm_smoothness")),
        raw_str(props.get("osm_highway")),
    )
}

fn raw_str(value: Option<&JsonValue>) -> &str {
    value.and_then(JsonValue::as_str).unwrap_or("")
}

/// Map the `class:bicycle` code onto the app's labeled comfort levels
///
/// Codes arrive as strings or numbers depending on the export that produced
/// the dataset, so numbers are stringified first (integer-valued without a
/// fractional part). Unmapped non-empty codes become `"ungültiger Wert"`,
/// empty input the empty string.
fn happy_bike_level(value: Option<&JsonValue>) -> String {
    let code = match value {
        Some(JsonValue::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "-" {
                return String::new();
            }
            trimmed.to_string()
        }
        Some(JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.to_string(),
        },
        _ => return String::new(),
    };

    let label = match code.as_str() {
        "3" => "3 = hervorragend = grün",
        "2" => "2 = gemütlich = grün",
        "1" => "1 = durchschnittlich = gelb",
        "0" => "0 = keine Aussage",
        "-1" => "-1 = stressig = rot",
        "-2" => "-2 = sehr stressig = schwarz",
        "-3" => "-3 = Unter allen Umständen vermeiden = schwarz",
        _ => "ungültiger Wert",
    };
    label.to_string()
}

/// Map the dataset's traffic-light color onto the app's German color names
fn farbe(value: Option<&JsonValue>) -> &'static str {
    match value.and_then(JsonValue::as_str).map(str::trim) {
        Some("green") => "grün",
        Some("yellow") => "gelb",
        Some("red") => "rot",
        Some("black") => "schwarz",
        // class:bicycle = 0; filtered out of the export, mapped anyway
        Some("blue") => "grau",
        _ => "-",
    }
}
