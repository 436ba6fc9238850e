//! Edit-Session: explizite Zustandsmaschine für genau einen Schnitt.
//!
//! `Idle → RouteSelected → SegmentSelected → FirstPointPicked → Committed`,
//! `cancel()` führt aus jedem Zustand zurück nach `Idle`. Die Session besitzt
//! alle Zwischengeometrie exklusiv; nach außen gelangt erst das `EditCommit`.

mod lifecycle;
mod state;


pub use state::EditSession;

use crate::core::{EditError, Path, Point, Polyline, Route, RouteId, DEFAULT_EPSILON};

/// Zustände der Edit-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Keine Trasse gewählt
    Idle,
    /// Trasse gewählt, Segment-Kandidaten liegen vor
    RouteSelected,
    /// Segment gewählt, erster Schnittpunkt fehlt
    SegmentSelected,
    /// Erster Schnittpunkt gesetzt, zweiter fehlt
    FirstPointPicked,
    /// Schnitt übernommen, Session ist verbraucht
    Committed,
}

/// Umgang mit Klicks weit abseits des Segments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnapPolicy {
    /// Jeder Klick wird auf das Segment projiziert
    #[default]
    AcceptAny,
    /// Klicks weiter als die Distanz werden mit `NoSnapTarget` abgelehnt
    RejectBeyond(f64),
}

/// Einstellungen einer Session (aus den `EditorOptions` abgeleitet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Toleranz für Positionsvergleiche
    pub epsilon: f64,
    /// Snap-Verhalten bei Klicks
    pub snap_policy: SnapPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            snap_policy: SnapPolicy::AcceptAny,
        }
    }
}

/// Auf ein Segment projizierter Klick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPoint {
    /// Position auf dem Segment
    pub point: Point,
    /// Part-Index des Segments innerhalb der Trasse
    pub path_index: usize,
    /// Abstand zum ursprünglichen Klick (nur für UI-Feedback)
    pub distance: f64,
}

/// Gründe, aus denen ein Klick abgelehnt wird. Die Session bleibt im
/// bisherigen Zustand, der User kann erneut klicken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    /// Klick zu weit vom Segment entfernt
    NoSnapTarget { distance: f64, max_distance: f64 },
    /// Zweiter Punkt fällt auf den ersten
    DegenerateCut,
}

impl From<RejectReason> for EditError {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::NoSnapTarget {
                distance,
                max_distance,
            } => EditError::NoSnapTarget {
                distance,
                max_distance,
            },
            RejectReason::DegenerateCut => EditError::DegenerateCut,
        }
    }
}

/// Ergebnis eines übernommenen Schnitts, zur Übergabe an den Routen-Speicher.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommit {
    /// ID der ersetzten Original-Trasse
    pub replaced: Option<RouteId>,
    /// Cutter, der aus dem Segment entfernt wurde
    pub cutter: Path,
    /// Zusammengesetzte Polylinie vor der Gruppierung
    pub spliced: Polyline,
    /// Neue Trassen, eine pro zusammenhängender Gruppe (ohne ID und Attribute)
    pub routes: Vec<Route>,
}

/// Rückgabe eines Klicks.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Erster Schnittpunkt gesetzt
    AwaitingSecondPoint(CutPoint),
    /// Schnitt übernommen
    Committed(EditCommit),
    /// Klick abgelehnt, Zustand unverändert
    Rejected(RejectReason),
}

/// Read-only Sicht auf den Session-Zustand (für Statusanzeige und Tests).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Aktueller Zustand
    pub state: SessionState,
    /// ID der bearbeiteten Trasse
    pub route_id: Option<RouteId>,
    /// Anzahl der Segment-Kandidaten
    pub candidate_count: usize,
    /// Gewähltes Segment
    pub selected_index: Option<usize>,
    /// Bisher gesetzte Schnittpunkte
    pub cut_points: Vec<CutPoint>,
}

/// Schnittstelle zum Host, der die Trassen darstellt.
///
/// Die Session schreibt nie selbst in den Speicher; sie blendet nur die
/// bearbeitete Trasse für die Dauer der Session aus.
pub trait RouteHost {
    /// Blendet eine Trasse aus (`true`) oder wieder ein (`false`).
    fn set_route_hidden(&mut self, id: RouteId, hidden: bool);
}
