//! Serde-Abbild des FeatureSet-Dokuments.

use serde::{Deserialize, Serialize};

use crate::core::RouteAttributes;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FeatureSetDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
    #[serde(default)]
    pub features: Vec<FeatureRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(super) struct SpatialReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkid: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct FeatureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PolylineGeometry>,
    #[serde(default)]
    pub attributes: RouteAttributes,
}

/// Koordinaten dürfen Z/M-Werte tragen; gelesen werden nur X und Y.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PolylineGeometry {
    #[serde(default)]
    pub paths: Vec<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
}
