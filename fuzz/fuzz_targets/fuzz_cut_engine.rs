#![no_main]

use libfuzzer_sys::fuzz_target;
use route_cut_editor::{
    difference, group_by_connectivity, slice_between, Path, Point, DEFAULT_EPSILON,
};

/// Liest Koordinaten als i16-Paare, damit alle Werte endlich bleiben.
fn points(data: &[u8]) -> Vec<Point> {
    data.chunks_exact(4)
        .map(|c| {
            let x = i16::from_le_bytes([c[0], c[1]]) as f64 / 16.0;
            let y = i16::from_le_bytes([c[2], c[3]]) as f64 / 16.0;
            Point::new(x, y)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let mut coords = points(data);
    if coords.len() < 4 {
        return;
    }
    let end = coords.pop().unwrap_or_default();
    let start = coords.pop().unwrap_or_default();
    let Ok(path) = Path::new(coords) else {
        return;
    };

    let cutter = slice_between(start, end, &path, DEFAULT_EPSILON);
    let remainder = difference(&path, &cutter, DEFAULT_EPSILON);
    assert!(remainder.part_count() <= 2);

    let mut parts = remainder.into_parts();
    parts.push(cutter);
    let groups = group_by_connectivity(&parts);
    assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), parts.len());
});
