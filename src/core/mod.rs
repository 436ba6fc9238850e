//! Core-Domänentypen: Geometrie, Trassen, Routen-Speicher, Spatial-Index.

pub mod error;
/// Geometrie-Grundtypen
///
/// - Point: Position im gemeinsamen 2D-Bezugssystem
/// - Path: zusammenhängender Linienzug (mind. 2 Punkte)
/// - Polyline: Sammlung unabhängiger Paths
pub mod geometry;
pub mod route;
pub mod route_layer;
pub mod spatial;

pub use error::{EditError, EditResult};
pub use geometry::{explode, touches, Bounds, Path, Point, Polyline, DEFAULT_EPSILON};
pub use route::{Route, RouteAttributes, RouteId};
pub use route_layer::{CommitApplied, LayerEntry, RouteLayer};
pub use spatial::{SegmentIndex, SegmentMatch};
