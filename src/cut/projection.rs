//! Projektion beliebiger Klickpunkte auf einen Pfad (Snap).

use crate::core::{EditError, EditResult, Path, Point};

/// Lage eines Punkts auf einem Pfad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathProjection {
    /// Nächster Punkt, der exakt auf dem Pfad liegt
    pub point: Point,
    /// Euklidische Distanz zwischen Abfragepunkt und `point`
    pub distance: f64,
    /// Index der Teilstrecke, auf der `point` liegt
    pub segment_index: usize,
    /// Parameter auf der Teilstrecke (0 = Anfang, 1 = Ende)
    pub t: f64,
    /// Bogenlänge vom Pfadanfang bis `point`
    pub measure: f64,
}

impl PathProjection {
    /// Lage am Pfadanfang.
    pub(crate) fn path_start(path: &Path) -> Self {
        Self {
            point: path.first(),
            distance: 0.0,
            segment_index: 0,
            t: 0.0,
            measure: 0.0,
        }
    }

    /// Lage am Pfadende.
    pub(crate) fn path_end(path: &Path) -> Self {
        Self {
            point: path.last(),
            distance: 0.0,
            segment_index: path.point_count() - 2,
            t: 1.0,
            measure: path.length(),
        }
    }
}

/// Projiziert `query` auf die Strecke `a`-`b`. Liefert Punkt und Parameter `t`.
///
/// Endpunkte werden exakt zurückgegeben statt interpoliert.
pub fn project_onto_segment(a: Point, b: Point, query: Point) -> (Point, f64) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return (a, 0.0);
    }
    let t = ((query - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let point = if t == 0.0 {
        a
    } else if t == 1.0 {
        b
    } else {
        a + ab * t
    };
    (point, t)
}

/// Nächster Punkt auf einem Pfad zu `query`.
///
/// Bei gleich weit entfernten Kandidaten gewinnt der erste in Pfadrichtung.
pub fn nearest_point_on_path(path: &Path, query: Point) -> PathProjection {
    scan_segments(path.points(), query)
}

/// Wie [`nearest_point_on_path`], aber für ungeprüfte Punktfolgen.
pub fn nearest_point_on_points(points: &[Point], query: Point) -> EditResult<PathProjection> {
    if points.len() < 2 {
        return Err(EditError::invalid_geometry(format!(
            "Projektion braucht mindestens 2 Punkte, hat {}",
            points.len()
        )));
    }
    Ok(scan_segments(points, query))
}

fn scan_segments(points: &[Point], query: Point) -> PathProjection {
    let mut best: Option<PathProjection> = None;
    let mut walked = 0.0;

    for (segment_index, pair) in points.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let (point, t) = project_onto_segment(a, b, query);
        let distance = point.distance(query);

        // strikt kleiner: erster Treffer bleibt bei Gleichstand
        if best.is_none_or(|current| distance < current.distance) {
            best = Some(PathProjection {
                point,
                distance,
                segment_index,
                t,
                measure: walked + a.distance(point),
            });
        }
        walked += a.distance(b);
    }

    best.unwrap_or(PathProjection {
        point: points[0],
        distance: points[0].distance(query),
        segment_index: 0,
        t: 0.0,
        measure: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn path(coords: &[[f64; 2]]) -> Path {
        Path::from_coords(coords.iter().copied()).expect("gültiger Pfad")
    }

    #[test]
    fn projects_onto_segment_interior() {
        let line = path(&[[0.0, 0.0], [10.0, 0.0]]);
        let hit = nearest_point_on_path(&line, Point::new(3.0, 2.0));

        assert_eq!(hit.point, Point::new(3.0, 0.0));
        assert_relative_eq!(hit.distance, 2.0);
        assert_eq!(hit.segment_index, 0);
        assert_relative_eq!(hit.measure, 3.0);
    }

    #[test]
    fn clamps_to_vertex_beyond_the_end() {
        let line = path(&[[0.0, 0.0], [10.0, 0.0], [10.0, 5.0]]);
        let hit = nearest_point_on_path(&line, Point::new(14.0, 9.0));

        assert_eq!(hit.point, Point::new(10.0, 5.0));
        assert_eq!(hit.segment_index, 1);
        assert_relative_eq!(hit.t, 1.0);
        assert_relative_eq!(hit.measure, 15.0);
    }

    #[test]
    fn tie_resolves_to_first_occurrence() {
        // U-Form: (5, 1) ist gleich weit von beiden Schenkeln entfernt
        let u_shape = path(&[[0.0, 0.0], [10.0, 0.0], [10.0, 2.0], [0.0, 2.0]]);
        let hit = nearest_point_on_path(&u_shape, Point::new(5.0, 1.0));

        assert_eq!(hit.segment_index, 0);
        assert_eq!(hit.point, Point::new(5.0, 0.0));
    }

    #[test]
    fn exact_vertex_query_returns_vertex() {
        let line = path(&[[0.0, 0.0], [0.3, 0.1], [1.0, 1.0]]);
        let hit = nearest_point_on_path(&line, Point::new(0.3, 0.1));

        assert_eq!(hit.point, Point::new(0.3, 0.1));
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn zero_length_segment_is_handled() {
        let line = path(&[[1.0, 1.0], [1.0, 1.0], [3.0, 1.0]]);
        let hit = nearest_point_on_path(&line, Point::new(2.0, 0.0));
        assert_eq!(hit.point, Point::new(2.0, 1.0));
        assert_eq!(hit.segment_index, 1);
    }

    #[test]
    fn raw_points_need_two_entries() {
        let result = nearest_point_on_points(&[Point::new(0.0, 0.0)], Point::new(1.0, 1.0));
        assert!(matches!(result, Err(EditError::InvalidGeometry { .. })));
    }
}
