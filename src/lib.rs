//! # radlnetz
//!
//! A library for building derived GeoJSON exports from the MunichWays
//! "IST_RadlVorrangNetz" dataset (Munich's priority cycling network).
//!
//! Every export follows the same shape: load one FeatureCollection, keep the
//! features passing a per-feature predicate, rewrite the kept features'
//! properties, and write a new FeatureCollection. Geometry is never touched.
//! The per-export behavior lives in [`pipeline::FeatureRule`] implementations.
//!
//! ## Example
//!
//! ```no_run
//! use radlnetz::geojson::document::{load_collection, write_collection};
//! use radlnetz::pipeline::transform_collection;
//! use radlnetz::targets::Target;
//! use std::path::Path;
//!
//! let doc = load_collection(Path::new("data/IST_RadlVorrangNetz_MunichWays_V20.geojson")).unwrap();
//!
//! let rule = Target::Nur.rule();
//! let (doc, summary) = transform_collection(doc, rule.as_ref());
//! println!("kept {} of {} features", summary.output_features, summary.input_features);
//!
//! write_collection(Path::new("data/NUR_RadlVorrangNetz_Ist.geojson"), &doc, false).unwrap();
//! ```

pub mod error;
pub mod extract;
pub mod geojson;
pub mod pipeline;
pub mod targets;

// Re-export commonly used items
pub use error::{RadlError, Result};
pub use pipeline::{FeatureRule, RunSummary};
pub use targets::Target;
