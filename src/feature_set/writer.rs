//! Writer für Polylinien-FeatureSets.

use anyhow::{Context, Result};

use super::document::{FeatureRecord, FeatureSetDocument, PolylineGeometry, SpatialReference};
use super::{OID_FIELD, POLYLINE_GEOMETRY_TYPE, WGS84_WKID};
use crate::core::Route;

/// Schreibt Trassen als FeatureSet-JSON (WGS84, eingerückt).
///
/// Gespeicherte Trassen tragen ihre ID im Attribut `OID`; ungespeicherte
/// Trassen werden ohne `OID` geschrieben.
pub fn write_feature_set<'a>(routes: impl IntoIterator<Item = &'a Route>) -> Result<String> {
    let features: Vec<FeatureRecord> = routes
        .into_iter()
        .map(|route| {
            let mut attributes = route.attributes.clone();
            match route.id {
                Some(id) => attributes.insert(OID_FIELD.to_string(), id.0.into()),
                None => attributes.remove(OID_FIELD),
            };
            FeatureRecord {
                geometry: Some(PolylineGeometry {
                    paths: route
                        .polyline
                        .paths()
                        .iter()
                        .map(|path| path.points().iter().map(|p| vec![p.x, p.y]).collect())
                        .collect(),
                    spatial_reference: None,
                }),
                attributes,
            }
        })
        .collect();

    let document = FeatureSetDocument {
        geometry_type: Some(POLYLINE_GEOMETRY_TYPE.to_string()),
        spatial_reference: Some(SpatialReference {
            wkid: Some(WGS84_WKID),
        }),
        features,
    };
    log::debug!("Schreibe FeatureSet mit {} Feature(s)", document.features.len());
    serde_json::to_string_pretty(&document).context("FeatureSet konnte nicht serialisiert werden")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Path, Polyline, RouteAttributes, RouteId};
    use crate::feature_set::parse_feature_set;

    #[test]
    fn writes_oid_and_keeps_attributes() {
        let mut attributes = RouteAttributes::new();
        attributes.insert("Total_Length".into(), 12.5.into());
        let saved = Route::new(
            RouteId(5),
            Polyline::single(Path::from_coords([[0.0, 0.0], [2.0, 1.0]]).unwrap()),
            attributes,
        );
        let unsaved = Route::unsaved(Polyline::single(
            Path::from_coords([[3.0, 3.0], [4.0, 3.0]]).unwrap(),
        ));

        let json = write_feature_set([&saved, &unsaved]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["geometryType"], POLYLINE_GEOMETRY_TYPE);
        assert_eq!(value["spatialReference"]["wkid"], 4326);
        assert_eq!(value["features"][0]["attributes"]["OID"], 5);
        assert_eq!(value["features"][0]["attributes"]["Total_Length"], 12.5);
        assert!(value["features"][1]["attributes"].get("OID").is_none());
        assert_eq!(
            value["features"][0]["geometry"]["paths"],
            serde_json::json!([[[0.0, 0.0], [2.0, 1.0]]])
        );
    }

    #[test]
    fn stale_oid_of_unsaved_route_is_dropped() {
        let mut route = Route::unsaved(Polyline::single(
            Path::from_coords([[0.0, 0.0], [1.0, 0.0]]).unwrap(),
        ));
        route.attributes.insert(OID_FIELD.into(), 77.into());

        let parsed = parse_feature_set(&write_feature_set([&route]).unwrap()).unwrap();
        assert_eq!(parsed[0].id, None);
        assert_eq!(parsed[0].polyline, route.polyline);
    }
}
