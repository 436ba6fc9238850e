/// Integration-Tests für FeatureSet-Parsing und -Export
use approx::assert_relative_eq;
use route_cut_editor::cut::group_indices;
use route_cut_editor::feature_set::{parse_feature_set, write_feature_set};
use route_cut_editor::{RouteId, RouteLayer};

const FIXTURE: &str = include_str!("fixtures/fiber_routes.json");

#[test]
fn test_parse_fixture_routes() {
    let routes = parse_feature_set(FIXTURE).unwrap();

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].id, Some(RouteId(1)));
    assert_eq!(routes[1].id, Some(RouteId(2)));
    assert_eq!(routes[0].polyline.part_count(), 3);
    assert_eq!(routes[1].polyline.part_count(), 5);
    assert_eq!(routes[1].polyline.paths()[4].point_count(), 3);
    assert_relative_eq!(
        routes[0].attributes["Total_Length"].as_f64().unwrap(),
        807.5121930587246
    );
}

#[test]
fn test_fixture_routes_are_connected() {
    let routes = parse_feature_set(FIXTURE).unwrap();

    for route in &routes {
        let groups = group_indices(route.polyline.paths());
        assert_eq!(groups.len(), 1, "Trasse {:?} zerfällt", route.id);
    }
}

#[test]
fn test_write_and_parse_roundtrip_keeps_geometry_and_attributes() {
    let routes = parse_feature_set(FIXTURE).unwrap();

    let json = write_feature_set(&routes).unwrap();
    let reparsed = parse_feature_set(&json).unwrap();

    assert_eq!(reparsed.len(), routes.len());
    for (a, b) in routes.iter().zip(&reparsed) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.attributes.len(), b.attributes.len());
        assert_eq!(a.polyline.part_count(), b.polyline.part_count());
        for (pa, pb) in a.polyline.paths().iter().zip(b.polyline.paths()) {
            assert!(pa.approx_eq(pb, 1e-12));
        }
        assert_relative_eq!(
            a.attributes["Total_FiberCost"].as_f64().unwrap(),
            b.attributes["Total_FiberCost"].as_f64().unwrap(),
            max_relative = 1e-15
        );
    }
}

#[test]
fn test_invalid_json_reports_context() {
    let err = parse_feature_set("{ \"features\": [").expect_err("kaputtes JSON");
    assert!(err.to_string().contains("JSON"));
}

#[test]
fn test_feature_without_oid_survives_later_explicit_oid() {
    let json = r#"{
        "geometryType": "esriGeometryPolyline",
        "spatialReference": { "wkid": 4326 },
        "features": [
            { "geometry": { "paths": [[[0, 0], [1, 0]]] }, "attributes": { "name": "ohne" } },
            { "geometry": { "paths": [[[5, 5], [6, 6]]] }, "attributes": { "OID": 1 } }
        ]
    }"#;

    let layer = RouteLayer::from_routes(parse_feature_set(json).unwrap());

    assert_eq!(layer.len(), 2);
    assert_eq!(layer.get(RouteId(1)).unwrap().attributes["OID"], 1);
    assert_eq!(layer.get(RouteId(2)).unwrap().attributes["name"], "ohne");

    let reparsed = parse_feature_set(&write_feature_set(layer.routes()).unwrap()).unwrap();
    assert_eq!(reparsed.len(), 2);
}
