use crate::geometry::point::Point;
use crate::geometry::polygon::Path;
use crate::utils::math::cycle_index;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PointLocation {
    Inside,
    Outside,
    OnBoundary,
}

/// `(a - origin) x (b - origin)`, exact.
#[inline(always)]
pub fn cross_product(origin: &Point<i64>, a: &Point<i64>, b: &Point<i64>) -> i128 {
    let origin = origin.widen();
    a.widen().sub(&origin).cross(&b.widen().sub(&origin))
}

/// Signed shoelace area: positive for counter-clockwise contours (y up).
pub fn area(path: &[Point<i64>]) -> f64 {
    let point_count = path.len();
    if point_count < 3 {
        return 0.0;
    }

    let mut sum: i128 = 0;
    for i in 0..point_count {
        let curr = path[i].widen();
        let next = path[cycle_index(i, point_count, 1)].widen();
        sum += curr.cross(&next);
    }

    sum as f64 * 0.5
}

pub fn orientation(path: &[Point<i64>]) -> bool {
    area(path) >= 0.0
}

/// Winding-number point-in-polygon test with an explicit on-edge result.
pub fn point_in_path(point: &Point<i64>, path: &[Point<i64>]) -> PointLocation {
    let point_count = path.len();
    if point_count < 3 {
        return PointLocation::Outside;
    }

    let origin = point.widen();
    let mut winding = 0;

    for i in 0..point_count {
        let start = path[i].widen();
        let end = path[cycle_index(i, point_count, 1)].widen();
        let side = end.sub(&start).cross(&origin.sub(&start));

        if side == 0
            && origin.x >= start.x.min(end.x)
            && origin.x <= start.x.max(end.x)
            && origin.y >= start.y.min(end.y)
            && origin.y <= start.y.max(end.y)
        {
            return PointLocation::OnBoundary;
        }

        if start.y <= origin.y {
            if end.y > origin.y && side > 0 {
                winding += 1;
            }
        } else if end.y <= origin.y && side < 0 {
            winding -= 1;
        }
    }

    if winding != 0 {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

/// Drops repeated points, collinear points and spikes. Returns an empty path when fewer
/// than three vertices survive.
pub fn clean_path(path: &[Point<i64>]) -> Path {
    let mut result: Path = path.to_vec();
    result.dedup();

    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }

    let mut changed = true;
    while changed && result.len() >= 3 {
        changed = false;
        let mut curr_index = 0;

        while curr_index < result.len() && result.len() >= 3 {
            let point_count = result.len();
            let prev = result[cycle_index(curr_index, point_count, -1)];
            let next = result[cycle_index(curr_index, point_count, 1)];

            if cross_product(&prev, &result[curr_index], &next) == 0 {
                result.remove(curr_index);
                changed = true;
            } else {
                curr_index += 1;
            }
        }
    }

    if result.len() < 3 {
        result.clear();
    }

    result
}
