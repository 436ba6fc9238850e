//! Geometrie-Grundtypen: Punkt, Pfad, Polylinie und die Berührungsprüfung.
//!
//! Alle Koordinaten liegen in genau einem nicht-projizierten 2D-Bezugssystem
//! (geographische Grad). Umprojektion ist Sache des Hosts.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{EditError, EditResult};

/// Ein Punkt im gemeinsamen 2D-Bezugssystem.
pub type Point = DVec2;

/// Standard-Toleranz für Positionsvergleiche (Einheit: Grad).
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Achsenparalleles Begrenzungsrechteck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimale Ecke
    pub min: Point,
    /// Maximale Ecke
    pub max: Point,
}

impl Bounds {
    /// Rechteck, das genau einen Punkt umschliesst.
    pub fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Erweitert das Rechteck um einen Punkt.
    pub fn expand(&mut self, point: Point) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Vereinigung zweier Rechtecke.
    pub fn union(self, other: Bounds) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Prüft auf Überlappung (Ränder zählen als Überlappung).
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Ein zusammenhängender Linienzug aus mindestens zwei Punkten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Erstellt einen Pfad. Weniger als zwei Punkte oder nicht-endliche
    /// Koordinaten ergeben `InvalidGeometry`.
    pub fn new(points: Vec<Point>) -> EditResult<Self> {
        if points.len() < 2 {
            return Err(EditError::invalid_geometry(format!(
                "Pfad braucht mindestens 2 Punkte, hat {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(EditError::invalid_geometry(format!(
                "nicht-endliche Koordinate {bad}"
            )));
        }
        Ok(Self { points })
    }

    /// Komfort-Konstruktor aus `[x, y]`-Paaren.
    pub fn from_coords<I>(coords: I) -> EditResult<Self>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        Self::new(coords.into_iter().map(Point::from).collect())
    }

    /// Pfad der Länge null an einer Position (degenerierter Schnitt).
    pub(crate) fn degenerate(at: Point) -> Self {
        Self {
            points: vec![at, at],
        }
    }

    /// Baut einen Pfad aus bereits geprüften Punkten, doppelte Folgepunkte
    /// werden entfernt.
    pub(crate) fn from_walk(points: Vec<Point>) -> Self {
        let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
        for point in points {
            if deduped.last() != Some(&point) {
                deduped.push(point);
            }
        }
        if deduped.len() < 2 {
            return Self::degenerate(deduped.first().copied().unwrap_or(Point::ZERO));
        }
        Self { points: deduped }
    }

    /// Alle Stützpunkte in Reihenfolge.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Anzahl der Stützpunkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Erster Punkt.
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// Letzter Punkt.
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Iteriert über alle Teilstrecken `(a, b)`.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Euklidische Gesamtlänge.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Begrenzungsrechteck aller Stützpunkte.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::from_point(self.points[0]);
        for point in &self.points[1..] {
            bounds.expand(*point);
        }
        bounds
    }

    /// `true` wenn der Pfad (innerhalb `epsilon`) keine Länge hat.
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.length() <= epsilon
    }

    /// Punktweiser Vergleich mit Toleranz.
    pub fn approx_eq(&self, other: &Path, epsilon: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.distance(*b) <= epsilon)
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = EditError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.points
    }
}

/// Geordnete Sammlung unabhängiger Pfade ("Parts").
///
/// Zwischen den Parts gibt es keine Nachbarschafts-Invariante; eine leere
/// Polylinie ist das Ergebnis eines Schnitts, der alles entfernt hat.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    parts: Vec<Path>,
}

impl Polyline {
    /// Erstellt eine Polylinie aus Parts.
    pub fn new(parts: Vec<Path>) -> Self {
        Self { parts }
    }

    /// Leere Polylinie ohne Parts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Einteilige Polylinie.
    pub fn single(path: Path) -> Self {
        Self { parts: vec![path] }
    }

    /// Alle Parts in Reihenfolge.
    pub fn paths(&self) -> &[Path] {
        &self.parts
    }

    /// Einzelner Part per Index.
    pub fn part(&self, index: usize) -> Option<&Path> {
        self.parts.get(index)
    }

    /// Anzahl der Parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// `true` wenn keine Parts vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Summe der Part-Längen.
    pub fn total_length(&self) -> f64 {
        self.parts.iter().map(Path::length).sum()
    }

    /// Begrenzungsrechteck über alle Parts (`None` bei leerer Polylinie).
    pub fn bounds(&self) -> Option<Bounds> {
        self.parts
            .iter()
            .map(Path::bounds)
            .reduce(Bounds::union)
    }

    /// Gibt die Parts frei.
    pub fn into_parts(self) -> Vec<Path> {
        self.parts
    }
}

impl FromIterator<Path> for Polyline {
    fn from_iter<T: IntoIterator<Item = Path>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Zerlegt eine mehrteilige Polylinie in einteilige Polylinien ("explode").
pub fn explode(polyline: &Polyline) -> Vec<Polyline> {
    polyline
        .paths()
        .iter()
        .cloned()
        .map(Polyline::single)
        .collect()
}

/// Prüft, ob zwei Pfade mindestens einen Punkt teilen.
///
/// Gemeinsame Stützpunkte, Punkt-auf-Strecke, echte Kreuzungen und kollineare
/// Überlappung zählen. Die Orientierungstests laufen ohne Toleranz: knapp
/// aneinander vorbeilaufende Pfade berühren sich nicht.
pub fn touches(a: &Path, b: &Path) -> bool {
    if !a.bounds().intersects(&b.bounds()) {
        return false;
    }
    a.segments().any(|(p1, p2)| {
        let seg_bounds = segment_bounds(p1, p2);
        b.segments().any(|(q1, q2)| {
            seg_bounds.intersects(&segment_bounds(q1, q2)) && segments_intersect(p1, p2, q1, q2)
        })
    })
}

fn segment_bounds(a: Point, b: Point) -> Bounds {
    Bounds {
        min: a.min(b),
        max: a.max(b),
    }
}

/// Vorzeichen des Kreuzprodukts (b - a) x (c - a).
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Liegt der (kollineare) Punkt `c` im Rechteck der Strecke `a`-`b`?
fn within_segment_box(a: Point, b: Point, c: Point) -> bool {
    c.x >= a.x.min(b.x) && c.x <= a.x.max(b.x) && c.y >= a.y.min(b.y) && c.y <= a.y.max(b.y)
}

fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    let straddles_q = (d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0);
    let straddles_p = (d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0);
    if straddles_q && straddles_p {
        return true;
    }

    (d1 == 0.0 && within_segment_box(q1, q2, p1))
        || (d2 == 0.0 && within_segment_box(q1, q2, p2))
        || (d3 == 0.0 && within_segment_box(p1, p2, q1))
        || (d4 == 0.0 && within_segment_box(p1, p2, q2))
}
