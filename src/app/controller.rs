//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Edit-Session ===
            AppCommand::BeginEdit { route_id } => handlers::edit::begin(state, route_id)?,
            AppCommand::SelectRouteAt {
                world_pos,
                max_distance,
            } => handlers::edit::select_route_at(state, world_pos, max_distance)?,
            AppCommand::PickSegment { index } => handlers::edit::pick_segment(state, index)?,
            AppCommand::PickSegmentAt { world_pos } => {
                handlers::edit::pick_segment_at(state, world_pos)?
            }
            AppCommand::PlaceCutPoint { world_pos } => {
                handlers::edit::place_cut_point(state, world_pos)?
            }
            AppCommand::UpdateHoverSnap { world_pos } => {
                handlers::edit::update_hover(state, world_pos)
            }
            AppCommand::ClearHoverSnap => handlers::edit::clear_hover(state),
            AppCommand::CancelEdit => handlers::edit::cancel(state),

            // === Datei-I/O ===
            AppCommand::LoadRoutes { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveRoutes { path } => handlers::file_io::save(state, path)?,
        }

        Ok(())
    }
}
