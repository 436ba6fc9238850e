//! Trassen (Routes): Polylinie plus undurchsichtige Attribute und Identität.

use serde::{Deserialize, Serialize};

use super::Polyline;

/// Attribut-Sammlung einer Trasse. Gehört dem Routen-Speicher und wird vom
/// Editor nicht interpretiert.
pub type RouteAttributes = serde_json::Map<String, serde_json::Value>;

/// Stabile Identität einer Trasse im Routen-Speicher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub u64);

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Eine Trasse: Geometrie, Attribute und (sofern gespeichert) ihre ID.
///
/// Neu erzeugte Trassen aus einem Schnitt haben `id == None`; die ID vergibt
/// erst der Speicher beim Übernehmen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    /// ID im Speicher, `None` für noch nicht gespeicherte Trassen
    pub id: Option<RouteId>,
    /// Geometrie (ein oder mehrere Parts)
    pub polyline: Polyline,
    /// Fachliche Attribute aus dem Speicher
    pub attributes: RouteAttributes,
}

impl Route {
    /// Erstellt eine gespeicherte Trasse.
    pub fn new(id: RouteId, polyline: Polyline, attributes: RouteAttributes) -> Self {
        Self {
            id: Some(id),
            polyline,
            attributes,
        }
    }

    /// Erstellt eine noch nicht gespeicherte Trasse ohne Attribute.
    pub fn unsaved(polyline: Polyline) -> Self {
        Self {
            id: None,
            polyline,
            attributes: RouteAttributes::new(),
        }
    }
}
