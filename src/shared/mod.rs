//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, Binary und Session teilen.

pub mod options;

pub use options::EditorOptions;
pub use options::{GEOMETRY_EPSILON, ROUTE_PICK_RADIUS};
