//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{CommitApplied, RouteLayer};
use crate::session::{CutPoint, EditOutcome, EditSession, SessionState};
use crate::shared::EditorOptions;

/// UI-bezogener Zustand ohne Geometrie.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub current_file_path: Option<String>,
    /// Letzte Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-State.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle geladenen Trassen
    pub layer: RouteLayer,
    /// Laufende Edit-Session (höchstens eine)
    pub session: Option<EditSession>,
    /// Projizierter Cursor für die Hover-Vorschau
    pub hover_snap: Option<CutPoint>,
    /// Ergebnis des letzten Klicks in der Session
    pub last_outcome: Option<EditOutcome>,
    /// Zuletzt in die Ebene übernommener Schnitt
    pub last_applied: Option<CommitApplied>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            layer: RouteLayer::new(),
            session: None,
            hover_snap: None,
            last_outcome: None,
            last_applied: None,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Trassen zurück (für UI-Anzeige)
    pub fn route_count(&self) -> usize {
        self.layer.len()
    }

    /// Zustand der laufenden Session, `None` ohne Session.
    pub fn session_state(&self) -> Option<SessionState> {
        self.session.as_ref().map(EditSession::state)
    }

    /// Statuszeile: explizite Meldung oder Hinweis der Session.
    pub fn status_text(&self) -> &str {
        if let Some(message) = self.ui.status_message.as_deref() {
            return message;
        }
        match &self.session {
            Some(session) => session.status_text(),
            None => "Trasse anklicken",
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
