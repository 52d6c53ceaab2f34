use crate::pipeline::{AppSchema, Consolidated, FeatureRule, TokenSubset};
use clap::ValueEnum;
use std::path::PathBuf;

/// The shared source dataset every export derives from
pub const DEFAULT_INPUT: &str = "data/IST_RadlVorrangNetz_MunichWays_V20.geojson";

const ROUTE_FIELD: &str = "munichways_mw_rv_route";
const STATUS_FIELD: &str = "munichways_status_implementation";
const TARGET_NET_FIELD: &str = "munichways_net_type_target";

// Allow-list order is priority order: the first entry present wins.
const ROUTE_ALLOWED: &[&str] = &["Premium", "Standard"];

const STATUS_ALLOWED: &[&str] = &[
    "beschlossen",
    "in_Umsetzung_BAU",
    "umgesetzt_allgemein",
    "umgesetzt_nach_REM",
];

const TARGET_NET_ALLOWED: &[&str] = &[
    "1_Rad-Ring",
    "4_Rad-Ring",
    "2_Rad-Schnell-Verbindung",
    "3_Rad-Vorrang-Haupt",
    "4_Rad-Vorrang",
];

/// The five derived datasets this tool can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Consolidated, field-cleaned network (ALL_RadlVorrangNetz_Ist)
    All,
    /// Premium/Standard route subset (NUR_RadlVorrangNetz_Ist)
    Nur,
    /// Implementation-status subset (Status_Umsetzung_Radentscheid)
    Status,
    /// Target-network subset (ZIEL_RadlVorrangNetz)
    Ziel,
    /// Fixed-schema app export (radlvorrangnetz_app_V07)
    App,
}

impl Target {
    /// Conventional output path for this export
    pub fn default_output(&self) -> PathBuf {
        let name = match self {
            Target::All => "ALL_RadlVorrangNetz_Ist.geojson",
            Target::Nur => "NUR_RadlVorrangNetz_Ist.geojson",
            Target::Status => "Status_Umsetzung_Radentscheid.geojson",
            Target::Ziel => "ZIEL_RadlVorrangNetz.geojson",
            Target::App => "radlvorrangnetz_app_V07.geojson",
        };
        PathBuf::from("data").join(name)
    }

    /// Build the transformation rule for this export
    pub fn rule(&self) -> Box<dyn FeatureRule> {
        match self {
            Target::All => Box::new(Consolidated),
            Target::Nur => Box::new(TokenSubset {
                field: ROUTE_FIELD,
                allowed: ROUTE_ALLOWED,
                add_mapillary_id: true,
            }),
            Target::Status => Box::new(TokenSubset {
                field: STATUS_FIELD,
                allowed: STATUS_ALLOWED,
                add_mapillary_id: true,
            }),
            Target::Ziel => Box::new(TokenSubset {
                field: TARGET_NET_FIELD,
                allowed: TARGET_NET_ALLOWED,
                add_mapillary_id: true,
            }),
            Target::App => Box::new(AppSchema::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value as JsonValue};

    #[test]
    fn test_default_outputs_live_under_data() {
        for target in [
            Target::All,
            Target::Nur,
            Target::Status,
            Target::Ziel,
            Target::App,
        ] {
            assert!(target.default_output().starts_with("data"));
        }
        assert_eq!(
            Target::Ziel.default_output(),
            PathBuf::from("data/ZIEL_RadlVorrangNetz.geojson")
        );
    }

    #[test]
    fn test_ziel_rule_uses_target_network_priorities() {
        let rule = Target::Ziel.rule();
        let mut props: Map<String, JsonValue> = serde_json::from_value(json!({
            "munichways_net_type_target": "3_Rad-Vorrang-Haupt, 1_Rad-Ring"
        }))
        .unwrap();

        assert!(rule.keep(&props));
        rule.apply(&mut props);
        assert_eq!(props["munichways_net_type_target"], json!("1_Rad-Ring"));
        // Subsets annotate the Mapillary image id as well.
        assert!(props.contains_key("mapillary_img_id"));
    }

    #[test]
    fn test_nur_rule_drops_other_routes() {
        let rule = Target::Nur.rule();
        let props: Map<String, JsonValue> = serde_json::from_value(json!({
            "munichways_mw_rv_route": "Nebennetz"
        }))
        .unwrap();
        assert!(!rule.keep(&props));
    }
}
