//! Use-Case-Funktionen für die Edit-Session.
//!
//! Vertragsfehler der Session werden geloggt, die Session wird verworfen und
//! die Trasse wieder eingeblendet. Abgelehnte Klicks bleiben in der Session.

use anyhow::{bail, Context};

use crate::app::AppState;
use crate::core::{EditError, Point, RouteId};
use crate::session::{EditOutcome, EditSession, RejectReason};

/// Startet eine Session für die Trasse. Eine laufende Session wird vorher abgebrochen.
pub fn begin_edit(state: &mut AppState, route_id: RouteId) -> anyhow::Result<()> {
    cancel_edit(state);

    let route = state
        .layer
        .get(route_id)
        .cloned()
        .with_context(|| format!("Trasse {route_id} existiert nicht"))?;
    let config = state.options.session_config();

    match EditSession::begin(route, &mut state.layer, config) {
        Ok(session) => {
            log::info!("Edit-Session für Trasse {route_id} gestartet");
            state.ui.status_message = None;
            state.last_outcome = None;
            state.session = Some(session);
            Ok(())
        }
        Err(err) => Err(discard_session(state, err)),
    }
}

/// Wählt die sichtbare Trasse unter dem Klick und startet eine Session.
pub fn select_route_at(
    state: &mut AppState,
    world_pos: Point,
    max_distance: f64,
) -> anyhow::Result<()> {
    match state.layer.pick_route(world_pos, max_distance) {
        Some(hit) => begin_edit(state, hit.route_id),
        None => {
            log::debug!("Keine Trasse innerhalb {max_distance} um {world_pos}");
            state.ui.status_message = Some("Keine Trasse getroffen".to_string());
            Ok(())
        }
    }
}

/// Wählt einen Segment-Kandidaten per Index.
pub fn pick_segment(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let Some(session) = state.session.as_mut() else {
        bail!("Keine aktive Edit-Session");
    };
    match session.pick_segment(index) {
        Ok(()) => {
            state.ui.status_message = None;
            Ok(())
        }
        Err(err) => Err(discard_session(state, err)),
    }
}

/// Wählt das Segment unter dem Klick; der Klick wird erster Schnittpunkt.
pub fn pick_segment_at(state: &mut AppState, world_pos: Point) -> anyhow::Result<()> {
    let Some(session) = state.session.as_mut() else {
        bail!("Keine aktive Edit-Session");
    };
    match session.pick_segment_at(world_pos) {
        Ok(outcome) => {
            apply_outcome(state, outcome);
            Ok(())
        }
        Err(err) => Err(discard_session(state, err)),
    }
}

/// Setzt einen Schnittpunkt; der zweite übernimmt den Schnitt in die Ebene.
pub fn place_cut_point(state: &mut AppState, world_pos: Point) -> anyhow::Result<()> {
    let Some(session) = state.session.as_mut() else {
        bail!("Keine aktive Edit-Session");
    };
    match session.click_point(world_pos) {
        Ok(outcome) => {
            apply_outcome(state, outcome);
            Ok(())
        }
        Err(err) => Err(discard_session(state, err)),
    }
}

/// Aktualisiert die Hover-Vorschau des Schnittpunkts.
pub fn update_hover_snap(state: &mut AppState, world_pos: Point) {
    state.hover_snap = state
        .session
        .as_ref()
        .and_then(|session| session.preview_snap(world_pos).ok());
}

/// Entfernt die Hover-Vorschau.
pub fn clear_hover_snap(state: &mut AppState) {
    state.hover_snap = None;
}

/// Bricht die laufende Session ab und blendet die Trasse wieder ein.
pub fn cancel_edit(state: &mut AppState) {
    if let Some(mut session) = state.session.take() {
        session.cancel(&mut state.layer);
        state.ui.status_message = Some("Bearbeitung abgebrochen".to_string());
    }
    state.hover_snap = None;
}

fn apply_outcome(state: &mut AppState, outcome: EditOutcome) {
    match &outcome {
        EditOutcome::AwaitingSecondPoint(cut) => {
            log::debug!("Erster Schnittpunkt bei {}", cut.point);
            state.ui.status_message = None;
        }
        EditOutcome::Rejected(reason) => {
            state.ui.status_message = Some(reject_message(reason));
        }
        EditOutcome::Committed(commit) => {
            let applied = state.layer.apply_commit(commit.clone());
            state.ui.status_message = Some(format!(
                "Schnitt übernommen: {} neue Trasse(n)",
                applied.inserted.len()
            ));
            state.last_applied = Some(applied);
            state.session = None;
            state.hover_snap = None;
        }
    }
    state.last_outcome = Some(outcome);
}

fn reject_message(reason: &RejectReason) -> String {
    match reason {
        RejectReason::NoSnapTarget {
            distance,
            max_distance,
        } => format!("Klick zu weit vom Segment ({distance:.6} > {max_distance:.6})"),
        RejectReason::DegenerateCut => "Zweiter Punkt fällt auf den ersten".to_string(),
    }
}

fn discard_session(state: &mut AppState, err: EditError) -> anyhow::Error {
    if err.is_recoverable() {
        return err.into();
    }
    log::error!("Edit-Session verworfen: {err}");
    if let Some(mut session) = state.session.take() {
        session.cancel(&mut state.layer);
    }
    state.hover_snap = None;
    state.ui.status_message = Some(err.to_string());
    anyhow::Error::new(err).context("Edit-Session verworfen")
}
