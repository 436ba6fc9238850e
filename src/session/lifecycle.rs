//! Zustandsübergänge der Edit-Session.

use super::state::EditSession;
use super::{
    CutPoint, EditCommit, EditOutcome, RejectReason, RouteHost, SessionConfig, SessionState,
    SnapPolicy,
};
use crate::core::{explode, EditError, EditResult, Point, Polyline, Route};
use crate::cut::{
    difference, group_by_connectivity, merge_groups, nearest_point_on_path, slice_between,
};

impl EditSession {
    /// Startet eine Session direkt mit einer gewählten Trasse (`beginEdit`).
    pub fn begin(
        route: Route,
        host: &mut dyn RouteHost,
        config: SessionConfig,
    ) -> EditResult<Self> {
        let mut session = Self::new(config);
        session.select_route(route, host)?;
        Ok(session)
    }

    fn require(&self, operation: &'static str, allowed: &[SessionState]) -> EditResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(EditError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    /// `Idle → RouteSelected`: übernimmt die Trasse, blendet sie beim Host aus
    /// und zerlegt sie in Segment-Kandidaten.
    pub fn select_route(&mut self, route: Route, host: &mut dyn RouteHost) -> EditResult<()> {
        self.require("select_route", &[SessionState::Idle])?;
        if route.polyline.is_empty() {
            return Err(EditError::invalid_geometry("Trasse ohne Parts"));
        }

        self.candidates = explode(&route.polyline)
            .into_iter()
            .flat_map(Polyline::into_parts)
            .collect();
        if let Some(id) = route.id {
            host.set_route_hidden(id, true);
        }
        log::debug!(
            "Trasse {:?} gewählt, {} Segment-Kandidaten",
            route.id,
            self.candidates.len()
        );
        self.route = Some(route);
        self.state = SessionState::RouteSelected;
        Ok(())
    }

    /// `RouteSelected → SegmentSelected`: wählt einen Kandidaten per Index.
    pub fn pick_segment(&mut self, index: usize) -> EditResult<()> {
        self.require("pick_segment", &[SessionState::RouteSelected])?;
        if index >= self.candidates.len() {
            return Err(EditError::SegmentOutOfRange {
                index,
                count: self.candidates.len(),
            });
        }
        self.selected = Some(index);
        self.state = SessionState::SegmentSelected;
        log::debug!("Segment {index} gewählt");
        Ok(())
    }

    /// `RouteSelected → FirstPointPicked`: wählt den Kandidaten, der dem Klick
    /// am nächsten liegt, und nutzt denselben Klick als ersten Schnittpunkt.
    pub fn pick_segment_at(&mut self, click: Point) -> EditResult<EditOutcome> {
        self.require("pick_segment_at", &[SessionState::RouteSelected])?;
        require_finite(click)?;

        let mut nearest: Option<(usize, f64)> = None;
        for (index, candidate) in self.candidates.iter().enumerate() {
            let distance = nearest_point_on_path(candidate, click).distance;
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }
        let Some((index, _)) = nearest else {
            return Err(EditError::invalid_geometry("keine Segment-Kandidaten"));
        };

        match self.snap(index, click) {
            Ok(cut) => {
                self.selected = Some(index);
                self.first_cut = Some(cut);
                self.state = SessionState::FirstPointPicked;
                log::debug!(
                    "Segment {index} per Klick gewählt, erster Schnittpunkt {}",
                    cut.point
                );
                Ok(EditOutcome::AwaitingSecondPoint(cut))
            }
            Err(reason) => Ok(EditOutcome::Rejected(reason)),
        }
    }

    /// Verarbeitet einen Klick auf das gewählte Segment.
    ///
    /// Der erste Klick setzt den ersten Schnittpunkt, der zweite führt den
    /// Schnitt aus. Vor der Segmentwahl ist der Aufruf ein Vertragsfehler.
    pub fn click_point(&mut self, click: Point) -> EditResult<EditOutcome> {
        self.require(
            "click_point",
            &[SessionState::SegmentSelected, SessionState::FirstPointPicked],
        )?;
        let index = self.selected_index()?;
        require_finite(click)?;

        let cut = match self.snap(index, click) {
            Ok(cut) => cut,
            Err(reason) => {
                log::info!("Klick abgelehnt: {reason:?}");
                return Ok(EditOutcome::Rejected(reason));
            }
        };

        match self.first_cut {
            None => {
                self.first_cut = Some(cut);
                self.state = SessionState::FirstPointPicked;
                log::debug!("Erster Schnittpunkt {}", cut.point);
                Ok(EditOutcome::AwaitingSecondPoint(cut))
            }
            Some(first) => self.commit(index, first, cut),
        }
    }

    /// Projiziert einen Cursor auf das gewählte Segment, ohne den Zustand zu ändern.
    pub fn preview_snap(&self, cursor: Point) -> EditResult<CutPoint> {
        self.require(
            "preview_snap",
            &[SessionState::SegmentSelected, SessionState::FirstPointPicked],
        )?;
        let index = self.selected_index()?;
        require_finite(cursor)?;
        let hit = nearest_point_on_path(&self.candidates[index], cursor);
        Ok(CutPoint {
            point: hit.point,
            path_index: index,
            distance: hit.distance,
        })
    }

    /// Bricht die Session aus jedem Zustand ab und blendet die Trasse wieder ein.
    pub fn cancel(&mut self, host: &mut dyn RouteHost) {
        if let Some(id) = self.route.as_ref().and_then(|route| route.id) {
            host.set_route_hidden(id, false);
        }
        log::debug!("Session aus Zustand {:?} abgebrochen", self.state);
        self.release();
        self.state = SessionState::Idle;
    }

    fn release(&mut self) {
        self.route = None;
        self.candidates.clear();
        self.selected = None;
        self.first_cut = None;
    }

    fn selected_index(&self) -> EditResult<usize> {
        self.selected.ok_or(EditError::InvalidState {
            operation: "selected_segment",
            state: self.state,
        })
    }

    fn snap(&self, index: usize, click: Point) -> Result<CutPoint, RejectReason> {
        let hit = nearest_point_on_path(&self.candidates[index], click);
        if let SnapPolicy::RejectBeyond(max_distance) = self.config.snap_policy {
            // NaN-Abstände gelten als außerhalb.
            let within = hit.distance <= max_distance;
            if !within {
                return Err(RejectReason::NoSnapTarget {
                    distance: hit.distance,
                    max_distance,
                });
            }
        }
        Ok(CutPoint {
            point: hit.point,
            path_index: index,
            distance: hit.distance,
        })
    }

    /// `FirstPointPicked → Committed`: Cutter bilden, Rest einsetzen, gruppieren.
    fn commit(
        &mut self,
        index: usize,
        first: CutPoint,
        second: CutPoint,
    ) -> EditResult<EditOutcome> {
        let epsilon = self.config.epsilon;
        let segment = &self.candidates[index];

        let cutter = slice_between(first.point, second.point, segment, epsilon);
        if cutter.is_degenerate(epsilon) {
            log::info!("Schnitt verworfen: beide Punkte bei {}", first.point);
            return Ok(EditOutcome::Rejected(RejectReason::DegenerateCut));
        }
        let remainder = difference(segment, &cutter, epsilon);

        let route = self.route.take().ok_or(EditError::InvalidState {
            operation: "commit",
            state: self.state,
        })?;
        let spliced = splice(&route.polyline, index, remainder);
        let routes: Vec<Route> = merge_groups(group_by_connectivity(spliced.paths()))
            .into_iter()
            .map(Route::unsaved)
            .collect();

        log::info!(
            "Schnitt in Trasse {:?}, Segment {index}: {} Parts -> {} Trasse(n)",
            route.id,
            spliced.part_count(),
            routes.len()
        );

        self.release();
        self.state = SessionState::Committed;
        Ok(EditOutcome::Committed(EditCommit {
            replaced: route.id,
            cutter,
            spliced,
            routes,
        }))
    }
}

fn require_finite(click: Point) -> EditResult<()> {
    if click.is_finite() {
        Ok(())
    } else {
        Err(EditError::invalid_geometry(format!(
            "Klickpunkt {click} ist nicht endlich"
        )))
    }
}

/// Ersetzt Part `index` durch die Parts des Rests (angehängt am Ende).
fn splice(original: &Polyline, index: usize, remainder: Polyline) -> Polyline {
    let kept = original
        .paths()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, path)| path.clone());
    kept.chain(remainder.into_parts()).collect()
}
