//! Fehlerarten der Geometrie- und Session-Schicht.

use thiserror::Error;

/// Alle Fehler, die Geometrie-Engine und Edit-Session melden können.
///
/// `InvalidGeometry`, `InvalidState` und `SegmentOutOfRange` sind Vertragsfehler
/// des Aufrufers und beenden die laufende Session. `NoSnapTarget` und
/// `DegenerateCut` sind Benutzereingaben, die wiederholt werden können.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Ungültige Eingabegeometrie (z.B. Pfad mit weniger als zwei Punkten)
    #[error("ungültige Geometrie: {reason}")]
    InvalidGeometry { reason: String },
    /// API-Aufruf passt nicht zum aktuellen Session-Zustand
    #[error("'{operation}' ist im Zustand {state:?} nicht erlaubt")]
    InvalidState {
        operation: &'static str,
        state: crate::session::SessionState,
    },
    /// Segment-Index liegt ausserhalb der Kandidatenliste
    #[error("Segment {index} existiert nicht (Route hat {count} Teile)")]
    SegmentOutOfRange { index: usize, count: usize },
    /// Klick liegt weiter als erlaubt von der Linie entfernt
    #[error("Klick {distance} vom Segment entfernt (erlaubt: {max_distance})")]
    NoSnapTarget { distance: f64, max_distance: f64 },
    /// Beide Schnittpunkte fallen auf dieselbe Position
    #[error("beide Schnittpunkte liegen auf derselben Position")]
    DegenerateCut,
}

impl EditError {
    /// Erzeugt einen `InvalidGeometry`-Fehler mit Begründung.
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// `true` für Eingabefehler, nach denen der User einfach erneut klicken kann.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSnapTarget { .. } | Self::DegenerateCut)
    }
}

/// Kurzform für Ergebnisse der Geometrie-Schicht.
pub type EditResult<T> = Result<T, EditError>;
