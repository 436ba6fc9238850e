//! Spatial-Index (KD-Tree) über Teilstrecken für schnelle Trassen-Picks.
//!
//! Indexiert werden die Mittelpunkte aller Teilstrecken. Eine Radiusabfrage
//! wird um die halbe Länge der längsten Teilstrecke erweitert, damit keine
//! Strecke durchfällt, deren Mittelpunkt weiter weg liegt als die Strecke selbst.

use kiddo::{KdTree, SquaredEuclidean};

use super::{Point, RouteId};
use crate::cut::project_onto_segment;

/// Eine indexierte Teilstrecke.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SegmentEntry {
    route_id: RouteId,
    part_index: usize,
    start: Point,
    end: Point,
}

/// Ergebnis einer Distanzabfrage gegen den Segment-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMatch {
    /// Trasse, zu der die Strecke gehört
    pub route_id: RouteId,
    /// Part-Index innerhalb der Trasse
    pub part_index: usize,
    /// Nächster Punkt auf der Strecke
    pub point: Point,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Index über alle Teilstrecken mehrerer Trassen.
#[derive(Debug, Clone)]
pub struct SegmentIndex {
    tree: KdTree<f64, 2>,
    entries: Vec<SegmentEntry>,
    max_half_length: f64,
}

impl SegmentIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            entries: Vec::new(),
            max_half_length: 0.0,
        }
    }

    /// Baut einen Index aus `(RouteId, Part-Index, Punkte)`-Tripeln.
    pub fn from_parts<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (RouteId, usize, &'a [Point])>,
    {
        let mut entries = Vec::new();
        for (route_id, part_index, points) in parts {
            entries.extend(points.windows(2).map(|pair| SegmentEntry {
                route_id,
                part_index,
                start: pair[0],
                end: pair[1],
            }));
        }

        let midpoints: Vec<[f64; 2]> = entries
            .iter()
            .map(|entry| {
                let mid = (entry.start + entry.end) * 0.5;
                [mid.x, mid.y]
            })
            .collect();
        let max_half_length = entries
            .iter()
            .map(|entry| entry.start.distance(entry.end) * 0.5)
            .fold(0.0, f64::max);

        Self {
            tree: (&midpoints).into(),
            entries,
            max_half_length,
        }
    }

    /// Anzahl indexierter Teilstrecken.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Strecken im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Teilstrecken innerhalb `radius`, aufsteigend nach Distanz.
    ///
    /// Bei gleicher Distanz entscheidet die Einfügereihenfolge.
    pub fn within_radius(&self, query: Point, radius: f64) -> Vec<SegmentMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let search = radius + self.max_half_length;
        let mut hits = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], search * search)
            .into_iter()
            .filter_map(|neighbour| {
                let index = neighbour.item as usize;
                let entry = self.entries.get(index)?;
                let (point, _) = project_onto_segment(entry.start, entry.end, query);
                let distance = point.distance(query);
                (distance <= radius).then_some((
                    index,
                    SegmentMatch {
                        route_id: entry.route_id,
                        part_index: entry.part_index,
                        point,
                        distance,
                    },
                ))
            })
            .collect::<Vec<_>>();

        hits.sort_by(|(ia, a), (ib, b)| a.distance.total_cmp(&b.distance).then(ia.cmp(ib)));
        hits.into_iter().map(|(_, hit)| hit).collect()
    }

    /// Nächste Teilstrecke innerhalb `radius`.
    pub fn nearest_within(&self, query: Point, radius: f64) -> Option<SegmentMatch> {
        self.within_radius(query, radius).into_iter().next()
    }
}
