use crate::core::{Point, RouteId};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Trasse wurde beim Host gewählt (z.B. aus einer Liste)
    RouteClicked { route_id: RouteId },
    /// Segment-Kandidat per Index gewählt
    SegmentPicked { index: usize },
    /// Klick auf einen Segment-Kandidaten der gewählten Trasse
    SegmentClicked { world_pos: Point },
    /// Klick in die Karte; Bedeutung hängt vom Session-Zustand ab
    MapClicked { world_pos: Point },
    /// Cursor bewegt (Hover-Vorschau des Schnittpunkts)
    PointerMoved { world_pos: Point },
    /// Escape: laufende Session abbrechen
    CancelRequested,
    /// FeatureSet-Datei laden
    LoadRoutesRequested { path: String },
    /// Trassen speichern (`None` = unter dem zuletzt geladenen Pfad)
    SaveRoutesRequested { path: Option<String> },
}
