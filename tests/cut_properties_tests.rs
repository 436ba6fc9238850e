use approx::assert_relative_eq;
use route_cut_editor::cut::group_indices;
use route_cut_editor::{
    difference, group_by_connectivity, merge_groups, parse_feature_set, slice_between, Path,
    Point, DEFAULT_EPSILON,
};

fn path(coords: &[[f64; 2]]) -> Path {
    Path::from_coords(coords.iter().copied()).unwrap()
}

fn fixture_paths() -> Vec<Path> {
    parse_feature_set(include_str!("fixtures/fiber_routes.json"))
        .unwrap()
        .into_iter()
        .flat_map(|route| route.polyline.into_parts())
        .collect()
}

#[test]
fn test_cut_between_three_and_seven() {
    let segment = path(&[[0.0, 0.0], [10.0, 0.0]]);

    let cutter = slice_between(
        Point::new(3.0, 0.0),
        Point::new(7.0, 0.0),
        &segment,
        DEFAULT_EPSILON,
    );
    let remainder = difference(&segment, &cutter, DEFAULT_EPSILON);

    assert_eq!(cutter, path(&[[3.0, 0.0], [7.0, 0.0]]));
    assert_eq!(
        remainder.paths(),
        &[
            path(&[[0.0, 0.0], [3.0, 0.0]]),
            path(&[[7.0, 0.0], [10.0, 0.0]])
        ]
    );
}

#[test]
fn test_regrouping_after_cut() {
    let b = path(&[[0.0, 0.0], [5.0, 0.0]]);
    let c = path(&[[5.0, 0.0], [5.0, 5.0]]);
    let d = path(&[[20.0, 20.0], [25.0, 20.0]]);

    let routes = merge_groups(group_by_connectivity(&[b.clone(), c.clone(), d.clone()]));

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].paths(), &[b, c]);
    assert_eq!(routes[1].paths(), &[d]);
}

#[test]
fn test_degenerate_cutter_keeps_fixture_paths() {
    for segment in fixture_paths() {
        let at = segment.points()[0].lerp(segment.points()[1], 0.5);
        let cutter = slice_between(at, at, &segment, DEFAULT_EPSILON);

        assert!(cutter.is_degenerate(DEFAULT_EPSILON));
        let remainder = difference(&segment, &cutter, DEFAULT_EPSILON);
        assert_eq!(remainder.part_count(), 1);
        assert!(remainder.paths()[0].approx_eq(&segment, DEFAULT_EPSILON));
    }
}

#[test]
fn test_cut_conserves_length_on_fixture_paths() {
    for segment in fixture_paths() {
        let points = segment.points();
        let start = points[0].lerp(points[1], 0.2);
        let end = points[points.len() - 1].lerp(points[points.len() - 2], 0.1);

        let cutter = slice_between(end, start, &segment, DEFAULT_EPSILON);
        let remainder = difference(&segment, &cutter, DEFAULT_EPSILON);

        assert_eq!(remainder.part_count(), 2);
        assert_relative_eq!(
            cutter.length() + remainder.total_length(),
            segment.length(),
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_endpoint_cuts_leave_one_or_no_part() {
    let segment = path(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]);
    let first = segment.first();
    let last = segment.last();

    let head = slice_between(first, Point::new(4.0, 1.0), &segment, DEFAULT_EPSILON);
    assert_eq!(difference(&segment, &head, DEFAULT_EPSILON).part_count(), 1);

    let full = slice_between(last, first, &segment, DEFAULT_EPSILON);
    assert!(difference(&segment, &full, DEFAULT_EPSILON).is_empty());
}

#[test]
fn test_grouping_fixture_parts_is_partition() {
    let paths = fixture_paths();

    let groups = group_indices(&paths);
    let mut seen: Vec<usize> = groups.iter().flatten().copied().collect();
    seen.sort_unstable();

    assert_eq!(groups.len(), 2);
    assert_eq!(seen, (0..paths.len()).collect::<Vec<_>>());
    assert_eq!(groups[0], vec![0, 1, 2]);
}
