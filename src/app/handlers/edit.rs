//! Handler für die Edit-Session (Trasse, Segment, Schnittpunkte).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Point, RouteId};

/// Startet eine Session für die Trasse.
pub fn begin(state: &mut AppState, route_id: RouteId) -> anyhow::Result<()> {
    use_cases::edit::begin_edit(state, route_id)
}

/// Wählt die Trasse unter dem Klick.
pub fn select_route_at(
    state: &mut AppState,
    world_pos: Point,
    max_distance: f64,
) -> anyhow::Result<()> {
    use_cases::edit::select_route_at(state, world_pos, max_distance)
}

/// Wählt einen Segment-Kandidaten per Index.
pub fn pick_segment(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::edit::pick_segment(state, index)
}

/// Wählt das Segment unter dem Klick.
pub fn pick_segment_at(state: &mut AppState, world_pos: Point) -> anyhow::Result<()> {
    use_cases::edit::pick_segment_at(state, world_pos)
}

/// Setzt einen Schnittpunkt.
pub fn place_cut_point(state: &mut AppState, world_pos: Point) -> anyhow::Result<()> {
    use_cases::edit::place_cut_point(state, world_pos)
}

/// Aktualisiert die Hover-Vorschau.
pub fn update_hover(state: &mut AppState, world_pos: Point) {
    use_cases::edit::update_hover_snap(state, world_pos);
}

/// Entfernt die Hover-Vorschau.
pub fn clear_hover(state: &mut AppState) {
    use_cases::edit::clear_hover_snap(state);
}

/// Bricht die laufende Session ab.
pub fn cancel(state: &mut AppState) {
    use_cases::edit::cancel_edit(state);
}
