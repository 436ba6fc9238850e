//! Zustandsdaten der Edit-Session und lesende Zugriffe.

use super::{CutPoint, SessionConfig, SessionSnapshot, SessionState};
use crate::core::{Path, Route};

/// Arbeitszustand einer Schnitt-Interaktion.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub(crate) state: SessionState,
    pub(crate) config: SessionConfig,
    /// Original-Trasse (solange die Session sie besitzt)
    pub(crate) route: Option<Route>,
    /// Einteilige Segment-Kandidaten, Index = Part-Index der Trasse
    pub(crate) candidates: Vec<Path>,
    /// Gewähltes Segment
    pub(crate) selected: Option<usize>,
    /// Erster Schnittpunkt
    pub(crate) first_cut: Option<CutPoint>,
}

impl EditSession {
    /// Erstellt eine leere Session im Zustand `Idle`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::Idle,
            config,
            route: None,
            candidates: Vec::new(),
            selected: None,
            first_cut: None,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Session-Einstellungen.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Die bearbeitete Original-Trasse.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Segment-Kandidaten mit ihrem Part-Index.
    pub fn candidate_segments(&self) -> Vec<(usize, &Path)> {
        self.candidates.iter().enumerate().collect()
    }

    /// Das gewählte Segment samt Index.
    pub fn selected_segment(&self) -> Option<(usize, &Path)> {
        let index = self.selected?;
        self.candidates.get(index).map(|path| (index, path))
    }

    /// Erster Schnittpunkt, falls gesetzt.
    pub fn first_cut_point(&self) -> Option<CutPoint> {
        self.first_cut
    }

    /// `true` wenn die Session Zwischenzustand hält, der bei Escape verworfen wird.
    pub fn has_pending_input(&self) -> bool {
        matches!(
            self.state,
            SessionState::RouteSelected
                | SessionState::SegmentSelected
                | SessionState::FirstPointPicked
        )
    }

    /// Statustext für die Anzeige beim Host.
    pub fn status_text(&self) -> &'static str {
        match self.state {
            SessionState::Idle => "Trasse anklicken",
            SessionState::RouteSelected => "Abschnitt der Trasse wählen",
            SessionState::SegmentSelected => "Ersten Schnittpunkt klicken",
            SessionState::FirstPointPicked => "Zweiten Schnittpunkt klicken, Escape bricht ab",
            SessionState::Committed => "Schnitt übernommen",
        }
    }

    /// Momentaufnahme des Zustands.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            route_id: self.route.as_ref().and_then(|route| route.id),
            candidate_count: self.candidates.len(),
            selected_index: self.selected,
            cut_points: self.first_cut.into_iter().collect(),
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
