//! In-Memory-Routen-Speicher des Hosts: Trassen, Sichtbarkeit und Pick-Index.

use indexmap::IndexMap;

use super::{Point, Route, RouteId, SegmentIndex, SegmentMatch};
use crate::session::{EditCommit, RouteHost};

/// Eine gespeicherte Trasse samt Sichtbarkeit.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry {
    /// Die Trasse (immer mit gesetzter ID)
    pub route: Route,
    /// Während einer Edit-Session ausgeblendet
    pub hidden: bool,
}

/// Ergebnis von [`RouteLayer::apply_commit`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommitApplied {
    /// Entfernte Original-Trasse
    pub removed: Option<RouteId>,
    /// IDs der neu eingefügten Trassen in Commit-Reihenfolge
    pub inserted: Vec<RouteId>,
}

/// Alle Trassen einer Ebene in Einfügereihenfolge.
#[derive(Debug, Clone)]
pub struct RouteLayer {
    routes: IndexMap<RouteId, LayerEntry>,
    next_id: u64,
    segment_index: SegmentIndex,
}

impl RouteLayer {
    /// Erstellt eine leere Ebene.
    pub fn new() -> Self {
        Self {
            routes: IndexMap::new(),
            next_id: 1,
            segment_index: SegmentIndex::empty(),
        }
    }

    /// Baut eine Ebene aus Trassen. Trassen ohne ID bekommen eine neue.
    ///
    /// Frische IDs liegen über allen vorhandenen, damit keine Trasse mit
    /// einer später vorkommenden expliziten ID kollidiert.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let routes: Vec<Route> = routes.into_iter().collect();
        let mut layer = Self::new();
        layer.next_id = routes
            .iter()
            .filter_map(|route| route.id)
            .map(|id| id.0.saturating_add(1))
            .fold(layer.next_id, u64::max);
        for route in routes {
            layer.insert_without_index(route);
        }
        layer.rebuild_segment_index();
        layer
    }

    /// Fügt eine Trasse ein und liefert ihre ID.
    ///
    /// Eine vorhandene ID wird übernommen (und ersetzt eine gleichnamige
    /// Trasse), sonst wird die nächste freie vergeben.
    pub fn insert(&mut self, route: Route) -> RouteId {
        let id = self.insert_without_index(route);
        self.rebuild_segment_index();
        id
    }

    fn insert_without_index(&mut self, mut route: Route) -> RouteId {
        let id = match route.id {
            Some(id) => id,
            None => RouteId(self.next_id),
        };
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        route.id = Some(id);
        self.routes.insert(
            id,
            LayerEntry {
                route,
                hidden: false,
            },
        );
        id
    }

    /// Entfernt eine Trasse.
    pub fn remove(&mut self, id: RouteId) -> Option<Route> {
        let removed = self.routes.shift_remove(&id).map(|entry| entry.route);
        if removed.is_some() {
            self.rebuild_segment_index();
        }
        removed
    }

    /// Trasse per ID.
    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(&id).map(|entry| &entry.route)
    }

    /// `true` wenn die Trasse existiert und ausgeblendet ist.
    pub fn is_hidden(&self, id: RouteId) -> bool {
        self.routes.get(&id).is_some_and(|entry| entry.hidden)
    }

    /// Anzahl der Trassen.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Gibt `true` zurück, wenn keine Trassen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Alle Trassen in Einfügereihenfolge.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values().map(|entry| &entry.route)
    }

    /// Alle sichtbaren Trassen.
    pub fn visible_routes(&self) -> impl Iterator<Item = &Route> {
        self.routes
            .values()
            .filter(|entry| !entry.hidden)
            .map(|entry| &entry.route)
    }

    /// Macht alle Trassen wieder sichtbar.
    pub fn show_all(&mut self) {
        for entry in self.routes.values_mut() {
            entry.hidden = false;
        }
    }

    /// Findet die sichtbare Trasse, die dem Klick am nächsten liegt.
    pub fn pick_route(&self, click: Point, radius: f64) -> Option<SegmentMatch> {
        self.segment_index
            .within_radius(click, radius)
            .into_iter()
            .find(|hit| !self.is_hidden(hit.route_id))
    }

    /// Übernimmt einen Schnitt: Original entfernen, neue Trassen einfügen.
    ///
    /// Neue Trassen erhalten frische IDs; ihre Attribute bleiben, wie der
    /// Aufrufer sie gesetzt hat.
    pub fn apply_commit(&mut self, commit: EditCommit) -> CommitApplied {
        let removed = commit
            .replaced
            .and_then(|id| self.routes.shift_remove(&id).map(|_| id));

        let inserted = commit
            .routes
            .into_iter()
            .map(|mut route| {
                route.id = None;
                self.insert_without_index(route)
            })
            .collect::<Vec<_>>();
        self.rebuild_segment_index();

        log::info!(
            "Schnitt übernommen: {:?} entfernt, {} Trasse(n) eingefügt",
            removed,
            inserted.len()
        );
        CommitApplied { removed, inserted }
    }

    fn rebuild_segment_index(&mut self) {
        self.segment_index = SegmentIndex::from_parts(self.routes.iter().flat_map(|(id, entry)| {
            entry
                .route
                .polyline
                .paths()
                .iter()
                .enumerate()
                .map(move |(part_index, path)| (*id, part_index, path.points()))
        }));
    }
}

impl Default for RouteLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteHost for RouteLayer {
    fn set_route_hidden(&mut self, id: RouteId, hidden: bool) {
        match self.routes.get_mut(&id) {
            Some(entry) => entry.hidden = hidden,
            None => log::warn!("Sichtbarkeit für unbekannte Trasse {id} angefragt"),
        }
    }
}
