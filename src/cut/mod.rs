//! Reine Geometrie-Operationen für den Schnitt: Projektion, Slicing, Gruppierung.

/// Zusammenhangskomponenten über der Berührungsrelation.
pub mod grouping;
/// Nächster Punkt auf einem Pfad.
pub mod projection;
/// Cutter und Differenz über die Bogenlänge.
pub mod slice;

pub use grouping::{group_by_connectivity, group_indices, merge_groups};
pub use projection::{
    nearest_point_on_path, nearest_point_on_points, project_onto_segment, PathProjection,
};
pub use slice::{difference, locate_on_path, slice_between};
