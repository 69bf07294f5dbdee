mod clipper_tests;

use crate::geometry::point::Point;
use crate::geometry::polygon::Path;

/// Counter-clockwise axis-aligned rectangle.
pub fn rect(left: i64, bottom: i64, right: i64, top: i64) -> Path {
    vec![
        Point::new(left, bottom),
        Point::new(right, bottom),
        Point::new(right, top),
        Point::new(left, top),
    ]
}

pub fn path(points: &[(i64, i64)]) -> Path {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Rotates a closed path so its smallest point comes first, making paths comparable
/// regardless of the vertex they start at.
pub fn canonical(polygon: &Path) -> Path {
    let start = polygon
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| **point)
        .map(|(index, _)| index)
        .unwrap_or(0);

    let mut result = polygon.clone();
    result.rotate_left(start);
    result
}
