//! JSON Import/Export für Polylinien-FeatureSets.
//!
//! Das Format ist ein Esri-FeatureSet mit `geometryType = esriGeometryPolyline`:
//! jede Feature trägt `geometry.paths` (Liste von Koordinatenlisten) und
//! beliebige `attributes`. Die Trassen-ID steckt im Attribut `OID`.

mod document;
pub mod parser;
pub mod writer;

pub use parser::parse_feature_set;
pub use writer::write_feature_set;

/// Attribut, das die Trassen-ID trägt.
pub const OID_FIELD: &str = "OID";

/// Geometrie-Typ für Polylinien.
pub const POLYLINE_GEOMETRY_TYPE: &str = "esriGeometryPolyline";

/// Einzig unterstütztes Bezugssystem (WGS84). Umprojektion ist Sache des Hosts.
pub const WGS84_WKID: u32 = 4326;
