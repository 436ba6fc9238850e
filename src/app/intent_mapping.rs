//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::session::SessionState;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RouteClicked { route_id } => vec![AppCommand::BeginEdit { route_id }],
        AppIntent::SegmentPicked { index } => vec![AppCommand::PickSegment { index }],
        AppIntent::SegmentClicked { world_pos } => vec![AppCommand::PickSegmentAt { world_pos }],
        AppIntent::MapClicked { world_pos } => match state.session_state() {
            Some(SessionState::RouteSelected) => vec![AppCommand::PickSegmentAt { world_pos }],
            Some(SessionState::SegmentSelected | SessionState::FirstPointPicked) => {
                vec![AppCommand::PlaceCutPoint { world_pos }]
            }
            None | Some(SessionState::Idle | SessionState::Committed) => {
                vec![AppCommand::SelectRouteAt {
                    world_pos,
                    max_distance: state.options.route_pick_radius,
                }]
            }
        },
        AppIntent::PointerMoved { world_pos } => {
            let previewable = matches!(
                state.session_state(),
                Some(SessionState::SegmentSelected | SessionState::FirstPointPicked)
            );
            if !state.options.hover_snap_enabled {
                vec![]
            } else if previewable {
                vec![AppCommand::UpdateHoverSnap { world_pos }]
            } else if state.hover_snap.is_some() {
                vec![AppCommand::ClearHoverSnap]
            } else {
                vec![]
            }
        }
        AppIntent::CancelRequested => vec![AppCommand::CancelEdit, AppCommand::ClearHoverSnap],
        AppIntent::LoadRoutesRequested { path } => vec![AppCommand::LoadRoutes { path }],
        AppIntent::SaveRoutesRequested { path } => vec![AppCommand::SaveRoutes { path }],
    }
}
