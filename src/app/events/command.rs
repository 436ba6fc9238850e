use crate::core::{Point, RouteId};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Edit-Session für eine Trasse starten
    BeginEdit { route_id: RouteId },
    /// Nächste sichtbare Trasse um die Klickposition wählen und Session starten
    SelectRouteAt { world_pos: Point, max_distance: f64 },
    /// Segment-Kandidat per Index wählen
    PickSegment { index: usize },
    /// Segment per Klick wählen, der Klick setzt den ersten Schnittpunkt
    PickSegmentAt { world_pos: Point },
    /// Schnittpunkt auf dem gewählten Segment setzen
    PlaceCutPoint { world_pos: Point },
    /// Hover-Vorschau aktualisieren
    UpdateHoverSnap { world_pos: Point },
    /// Hover-Vorschau entfernen
    ClearHoverSnap,
    /// Laufende Session abbrechen und Trasse wieder einblenden
    CancelEdit,
    /// Trassen aus FeatureSet-Datei laden
    LoadRoutes { path: String },
    /// Trassen als FeatureSet speichern
    SaveRoutes { path: Option<String> },
}
