//! Parser für Polylinien-FeatureSets.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};

use super::document::{FeatureRecord, FeatureSetDocument, SpatialReference};
use super::{OID_FIELD, POLYLINE_GEOMETRY_TYPE, WGS84_WKID};
use crate::core::{Path, Point, Polyline, Route, RouteId};

/// Parsed ein FeatureSet aus einem JSON-String.
///
/// Features ohne `OID` erhalten keine ID; der Routen-Speicher vergibt sie
/// dann in Feature-Reihenfolge.
pub fn parse_feature_set(json: &str) -> Result<Vec<Route>> {
    let document: FeatureSetDocument =
        serde_json::from_str(json).context("FeatureSet ist kein gültiges JSON")?;

    if let Some(geometry_type) = document.geometry_type.as_deref() {
        if geometry_type != POLYLINE_GEOMETRY_TYPE {
            bail!("Nicht unterstützter Geometrie-Typ: {geometry_type}");
        }
    }
    check_spatial_reference(document.spatial_reference)?;

    let mut seen = HashSet::new();
    let mut routes = Vec::with_capacity(document.features.len());
    for (index, feature) in document.features.into_iter().enumerate() {
        let route = parse_feature(feature).with_context(|| format!("Feature {index}"))?;
        if let Some(id) = route.id {
            if !seen.insert(id) {
                bail!("Doppelte {OID_FIELD} {} in Feature {index}", id.0);
            }
        }
        routes.push(route);
    }

    log::info!("FeatureSet geladen: {} Trasse(n)", routes.len());
    Ok(routes)
}

fn check_spatial_reference(reference: Option<SpatialReference>) -> Result<()> {
    match reference.and_then(|r| r.wkid) {
        None => Ok(()),
        Some(WGS84_WKID) => Ok(()),
        Some(other) => bail!("Bezugssystem wkid {other} nicht unterstützt (erwartet {WGS84_WKID})"),
    }
}

fn parse_feature(feature: FeatureRecord) -> Result<Route> {
    let id = match feature.attributes.get(OID_FIELD) {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(RouteId(value.as_u64().with_context(|| {
            format!("{OID_FIELD} ist keine nichtnegative Ganzzahl: {value}")
        })?)),
    };

    let polyline = match feature.geometry {
        Some(geometry) => {
            check_spatial_reference(geometry.spatial_reference)?;
            geometry
                .paths
                .into_iter()
                .enumerate()
                .map(|(part, coords)| parse_path(coords).with_context(|| format!("Pfad {part}")))
                .collect::<Result<Polyline>>()?
        }
        None => Polyline::empty(),
    };

    Ok(Route {
        id,
        polyline,
        attributes: feature.attributes,
    })
}

fn parse_path(coords: Vec<Vec<f64>>) -> Result<Path> {
    let points = coords
        .into_iter()
        .enumerate()
        .map(|(index, coord)| -> Result<Point> {
            match coord.as_slice() {
                [x, y, ..] => Ok(Point::new(*x, *y)),
                _ => bail!("Koordinate {index} hat weniger als zwei Werte"),
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Path::new(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROUTES: &str = r#"{
        "geometryType": "esriGeometryPolyline",
        "spatialReference": { "wkid": 4326 },
        "features": [
            {
                "geometry": { "paths": [[[0, 0], [1, 0]], [[1, 0], [1, 1, 5.0]]] },
                "attributes": { "OID": 3, "name": "Nord" }
            },
            {
                "geometry": { "paths": [[[5, 5], [6, 6]]] },
                "attributes": { "name": "Süd" }
            }
        ]
    }"#;

    #[test]
    fn parses_ids_paths_and_attributes() {
        let routes = parse_feature_set(TWO_ROUTES).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].id, Some(RouteId(3)));
        assert_eq!(routes[0].polyline.part_count(), 2);
        assert_eq!(routes[0].polyline.paths()[1].last(), Point::new(1.0, 1.0));
        assert_eq!(routes[0].attributes["name"], "Nord");
        assert_eq!(routes[1].id, None);
    }

    #[test]
    fn rejects_foreign_spatial_reference() {
        let json = r#"{ "spatialReference": { "wkid": 3857 }, "features": [] }"#;

        let err = parse_feature_set(json).expect_err("wkid 3857 muss abgelehnt werden");
        assert!(err.to_string().contains("3857"));
    }

    #[test]
    fn rejects_wrong_geometry_type() {
        let json = r#"{ "geometryType": "esriGeometryPoint", "features": [] }"#;
        assert!(parse_feature_set(json).is_err());
    }

    #[test]
    fn rejects_single_point_path_with_context() {
        let json = r#"{ "features": [ { "geometry": { "paths": [[[0, 0]]] } } ] }"#;

        let err = parse_feature_set(json).expect_err("Ein-Punkt-Pfad ist ungültig");
        let chain = format!("{err:#}");
        assert!(chain.contains("Feature 0"), "{chain}");
        assert!(chain.contains("Pfad 0"), "{chain}");
    }

    #[test]
    fn rejects_duplicate_oid() {
        let json = r#"{ "features": [
            { "geometry": { "paths": [[[0, 0], [1, 0]]] }, "attributes": { "OID": 1 } },
            { "geometry": { "paths": [[[0, 1], [1, 1]]] }, "attributes": { "OID": 1 } }
        ] }"#;
        assert!(parse_feature_set(json).is_err());
    }

    #[test]
    fn rejects_negative_oid() {
        let json = r#"{ "features": [
            { "geometry": { "paths": [[[0, 0], [1, 0]]] }, "attributes": { "OID": -4 } }
        ] }"#;
        assert!(parse_feature_set(json).is_err());
    }

    #[test]
    fn feature_without_geometry_is_empty_route() {
        let json = r#"{ "features": [ { "attributes": { "OID": 9 } } ] }"#;

        let routes = parse_feature_set(json).unwrap();
        assert!(routes[0].polyline.is_empty());
    }
}
