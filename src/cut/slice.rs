//! Ausschneiden eines Teilstücks aus einem Pfad über die Bogenlänge.
//!
//! `slice_between` liefert den "Cutter" zwischen zwei Positionen,
//! `difference` die ein oder zwei Reststücke nach dem Entfernen des Cutters.

use std::cmp::Ordering;

use super::projection::{nearest_point_on_path, PathProjection};
use crate::core::{Path, Point, Polyline};

/// Verortet einen Punkt auf dem Pfad (Projektion auf die nächste Stelle).
pub fn locate_on_path(path: &Path, point: Point) -> PathProjection {
    nearest_point_on_path(path, point)
}

/// Reihenfolge zweier Lagen entlang des Pfads.
fn along_path(a: &PathProjection, b: &PathProjection) -> Ordering {
    a.measure
        .total_cmp(&b.measure)
        .then(a.segment_index.cmp(&b.segment_index))
        .then(a.t.total_cmp(&b.t))
}

/// Läuft den Pfad von `from` bis `to` ab (`from` liegt nicht hinter `to`).
fn walk_between(path: &Path, from: &PathProjection, to: &PathProjection) -> Path {
    let vertices = path.points();
    let mut walked = Vec::with_capacity(to.segment_index.saturating_sub(from.segment_index) + 2);
    walked.push(from.point);
    for index in (from.segment_index + 1)..=to.segment_index {
        walked.push(vertices[index]);
    }
    walked.push(to.point);
    Path::from_walk(walked)
}

/// Schneidet das Teilstück zwischen `start` und `end` aus `path` heraus.
///
/// Beide Punkte werden auf den Pfad projiziert; das Ergebnis läuft immer in
/// Pfadrichtung. Liegen beide Positionen innerhalb `epsilon` (Bogenlänge)
/// beieinander, ist der Cutter der degenerierte Pfad der Länge null.
pub fn slice_between(start: Point, end: Point, path: &Path, epsilon: f64) -> Path {
    let mut from = locate_on_path(path, start);
    let mut to = locate_on_path(path, end);
    if along_path(&from, &to) == Ordering::Greater {
        std::mem::swap(&mut from, &mut to);
    }

    if to.measure - from.measure <= epsilon {
        return Path::degenerate(from.point);
    }
    walk_between(path, &from, &to)
}

/// Entfernt den vom Cutter überdeckten Abschnitt aus `path`.
///
/// - Cutter überdeckt den ganzen Pfad: leere Polylinie
/// - Cutter berührt genau einen Endpunkt: ein Part
/// - Cutter liegt im Inneren: zwei Parts (davor, danach)
/// - degenerierter Cutter: der unveränderte Pfad als einziger Part
pub fn difference(path: &Path, cutter: &Path, epsilon: f64) -> Polyline {
    if cutter.is_degenerate(epsilon) {
        return Polyline::single(path.clone());
    }

    let mut from = locate_on_path(path, cutter.first());
    let mut to = locate_on_path(path, cutter.last());
    if along_path(&from, &to) == Ordering::Greater {
        std::mem::swap(&mut from, &mut to);
    }
    if to.measure - from.measure <= epsilon {
        return Polyline::single(path.clone());
    }

    let path_start = PathProjection::path_start(path);
    let path_end = PathProjection::path_end(path);

    let mut parts = Vec::with_capacity(2);
    if from.measure > epsilon {
        parts.push(walk_between(path, &path_start, &from));
    }
    if path_end.measure - to.measure > epsilon {
        parts.push(walk_between(path, &to, &path_end));
    }
    Polyline::new(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_EPSILON;
    use approx::assert_relative_eq;

    fn path(coords: &[[f64; 2]]) -> Path {
        Path::from_coords(coords.iter().copied()).expect("gültiger Pfad")
    }

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn slice_on_single_segment() {
        let a = path(&[[0.0, 0.0], [10.0, 0.0]]);
        let cutter = slice_between(pt(3.0, 0.0), pt(7.0, 0.0), &a, DEFAULT_EPSILON);
        assert_eq!(cutter, path(&[[3.0, 0.0], [7.0, 0.0]]));

        let rest = difference(&a, &cutter, DEFAULT_EPSILON);
        assert_eq!(rest.part_count(), 2);
        assert_eq!(rest.paths()[0], path(&[[0.0, 0.0], [3.0, 0.0]]));
        assert_eq!(rest.paths()[1], path(&[[7.0, 0.0], [10.0, 0.0]]));
    }

    #[test]
    fn slice_keeps_inner_vertices_and_path_direction() {
        let zigzag = path(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [4.0, 2.0]]);
        // absichtlich rückwärts übergeben
        let cutter = slice_between(pt(3.0, 2.0), pt(1.0, 0.0), &zigzag, DEFAULT_EPSILON);
        assert_eq!(
            cutter,
            path(&[[1.0, 0.0], [2.0, 0.0], [2.0, 2.0], [3.0, 2.0]])
        );
    }

    #[test]
    fn slice_between_vertices_does_not_duplicate_points() {
        let line = path(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        let cutter = slice_between(pt(1.0, 0.0), pt(2.0, 0.0), &line, DEFAULT_EPSILON);
        assert_eq!(cutter, path(&[[1.0, 0.0], [2.0, 0.0]]));
    }

    #[test]
    fn coinciding_points_give_degenerate_cutter() {
        let line = path(&[[0.0, 0.0], [10.0, 0.0]]);
        let cutter = slice_between(pt(4.0, 1.0), pt(4.0, -1.0), &line, DEFAULT_EPSILON);
        assert!(cutter.is_degenerate(DEFAULT_EPSILON));

        let rest = difference(&line, &cutter, DEFAULT_EPSILON);
        assert_eq!(rest, Polyline::single(line));
    }

    #[test]
    fn full_span_cut_leaves_nothing() {
        let line = path(&[[0.0, 0.0], [5.0, 5.0], [10.0, 0.0]]);
        let cutter = slice_between(line.first(), line.last(), &line, DEFAULT_EPSILON);
        assert_eq!(cutter, line);
        assert!(difference(&line, &cutter, DEFAULT_EPSILON).is_empty());
    }

    #[test]
    fn cut_touching_one_endpoint_leaves_one_part() {
        let line = path(&[[0.0, 0.0], [10.0, 0.0]]);
        let head = slice_between(pt(0.0, 0.0), pt(4.0, 0.0), &line, DEFAULT_EPSILON);
        let rest = difference(&line, &head, DEFAULT_EPSILON);
        assert_eq!(rest.part_count(), 1);
        assert_eq!(rest.paths()[0], path(&[[4.0, 0.0], [10.0, 0.0]]));

        let tail = slice_between(pt(6.0, 0.0), pt(12.0, 3.0), &line, DEFAULT_EPSILON);
        let rest = difference(&line, &tail, DEFAULT_EPSILON);
        assert_eq!(rest.part_count(), 1);
        assert_eq!(rest.paths()[0], path(&[[0.0, 0.0], [6.0, 0.0]]));
    }

    #[test]
    fn lengths_are_conserved() {
        let route = path(&[
            [0.0, 0.0],
            [3.0, 4.0],
            [6.0, 0.0],
            [9.0, 4.0],
            [12.0, 0.0],
        ]);
        let cutter = slice_between(pt(1.5, 2.0), pt(10.0, 2.0), &route, DEFAULT_EPSILON);
        let rest = difference(&route, &cutter, DEFAULT_EPSILON);

        assert_eq!(rest.part_count(), 2);
        assert_relative_eq!(
            rest.total_length() + cutter.length(),
            route.length(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn off_path_points_are_snapped_before_slicing() {
        let line = path(&[[0.0, 0.0], [10.0, 0.0]]);
        let cutter = slice_between(pt(2.0, 3.0), pt(8.0, -3.0), &line, DEFAULT_EPSILON);
        assert_eq!(cutter, path(&[[2.0, 0.0], [8.0, 0.0]]));
    }
}
