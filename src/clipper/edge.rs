use crate::clipper::constants::MAX_SNAP_ROUNDS;
use crate::clipper::enums::PolyType;
use crate::geometry::point::Point;
use crate::geometry::polygon::Path;
use crate::utils::math::cycle_index;
use crate::utils::round::ClipperRound;
use std::collections::BTreeSet;

/// Directed piece of an input contour, tagged with the operand it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: Point<i64>,
    pub end: Point<i64>,
    pub poly_type: PolyType,
}

impl Edge {
    pub fn new(start: Point<i64>, end: Point<i64>, poly_type: PolyType) -> Self {
        Self {
            start,
            end,
            poly_type,
        }
    }

    #[inline(always)]
    pub fn delta(&self) -> Point<i128> {
        self.end.widen().sub(&self.start.widen())
    }

    /// Endpoints in canonical order; edges covering the same segment share a key.
    #[inline(always)]
    pub fn key(&self) -> (Point<i64>, Point<i64>) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    #[inline(always)]
    fn bounds(&self) -> (Point<i64>, Point<i64>) {
        (self.start.min_with(&self.end), self.start.max_with(&self.end))
    }

    fn projection(&self, point: &Point<i64>) -> i128 {
        point.widen().sub(&self.start.widen()).dot(&self.delta())
    }

    /// Does the edge touch the closed unit square centred on `pixel`? Evaluated on doubled
    /// coordinates so the square corners stay on the grid.
    fn touches_pixel(&self, pixel: &Point<i64>) -> bool {
        let (min, max) = self.bounds();
        let centre = pixel.widen().scale_up(2);
        let min = min.widen().scale_up(2);
        let max = max.widen().scale_up(2);

        if min.x > centre.x + 1 || max.x < centre.x - 1 || min.y > centre.y + 1 || max.y < centre.y - 1 {
            return false;
        }

        let start = self.start.widen().scale_up(2);
        let delta = self.delta();
        let mut above = 0;
        let mut below = 0;

        for (dx, dy) in [(-1i128, -1i128), (1, -1), (1, 1), (-1, 1)] {
            let corner = Point::new(centre.x + dx, centre.y + dy);
            let side = delta.cross(&corner.sub(&start));

            if side > 0 {
                above += 1;
            } else if side < 0 {
                below += 1;
            }
        }

        above < 4 && below < 4
    }
}

pub fn collect_edges(paths: &[Path], poly_type: PolyType, edges: &mut Vec<Edge>) {
    for path in paths {
        let point_count = path.len();
        if point_count < 2 {
            continue;
        }

        for i in 0..point_count {
            let start = path[i];
            let end = path[cycle_index(i, point_count, 1)];

            if start != end {
                edges.push(Edge::new(start, end, poly_type));
            }
        }
    }
}

/// `start + step * t / denom` rounded half away from zero, for `denom > 0`.
fn round_ratio(start: i64, step: i128, t: i128, denom: i128) -> i64 {
    let numerator = (start as i128)
        .checked_mul(denom)
        .and_then(|base| step.checked_mul(t).and_then(|offset| base.checked_add(offset)));

    match numerator {
        Some(numerator) => {
            let quotient = numerator.div_euclid(denom);
            let remainder = numerator.rem_euclid(denom);
            let rest = denom - remainder;
            let round_up = remainder > rest || (remainder == rest && numerator >= 0);

            (quotient + round_up as i128) as i64
        }
        None => (start as f64 + step as f64 * (t as f64 / denom as f64)).clipper_rounded() as i64,
    }
}

/// Point where two edges cross inside both of them, rounded to the grid. Touching at an
/// endpoint and collinear overlaps give `None`; those are covered by the endpoint pixels.
fn crossing_point(edge1: &Edge, edge2: &Edge) -> Option<Point<i64>> {
    let r = edge1.delta();
    let s = edge2.delta();
    let offset = edge2.start.widen().sub(&edge1.start.widen());
    let mut denom = r.cross(&s);

    if denom == 0 {
        return None;
    }

    let mut t = offset.cross(&s);
    let mut u = offset.cross(&r);

    if denom < 0 {
        denom = -denom;
        t = -t;
        u = -u;
    }

    if t <= 0 || t >= denom || u <= 0 || u >= denom {
        return None;
    }

    Some(Point::new(
        round_ratio(edge1.start.x, r.x, t, denom),
        round_ratio(edge1.start.y, r.y, t, denom),
    ))
}

/// Grid points every piece has to pass through: all endpoints and all rounded crossings.
/// Candidate pairs come from a sweep along x over the edge bounds.
fn hot_pixels(edges: &[Edge]) -> BTreeSet<Point<i64>> {
    let mut pixels: BTreeSet<Point<i64>> = edges.iter().flat_map(|edge| [edge.start, edge.end]).collect();
    let bounds: Vec<(Point<i64>, Point<i64>)> = edges.iter().map(Edge::bounds).collect();
    let mut order: Vec<usize> = (0..edges.len()).collect();

    order.sort_by_key(|&index| bounds[index].0.x);

    for (position, &i) in order.iter().enumerate() {
        let (min, max) = bounds[i];

        for &j in &order[position + 1..] {
            let (other_min, other_max) = bounds[j];

            if other_min.x > max.x {
                break;
            }

            if other_min.y <= max.y && min.y <= other_max.y {
                if let Some(point) = crossing_point(&edges[i], &edges[j]) {
                    pixels.insert(point);
                }
            }
        }
    }

    pixels
}

/// Routes every edge through the centres of the hot pixels it touches. Returns whether
/// any edge was rerouted.
fn snap_to_pixels(edges: &[Edge], pixels: &BTreeSet<Point<i64>>, result: &mut Vec<Edge>) -> bool {
    let mut changed = false;

    for edge in edges {
        let (min, max) = edge.bounds();
        let range = Point::new(min.x - 1, i64::MIN)..=Point::new(max.x + 1, i64::MAX);
        let mut hits: Vec<Point<i64>> = pixels
            .range(range)
            .filter(|pixel| pixel.y >= min.y - 1 && pixel.y <= max.y + 1)
            .filter(|pixel| **pixel != edge.start && **pixel != edge.end && edge.touches_pixel(pixel))
            .copied()
            .collect();

        if hits.is_empty() {
            result.push(*edge);
            continue;
        }

        changed = true;
        hits.sort_by_key(|pixel| edge.projection(pixel));

        let mut start = edge.start;
        for point in hits.into_iter().chain(std::iter::once(edge.end)) {
            if point != start {
                result.push(Edge::new(start, point, edge.poly_type));
                start = point;
            }
        }
    }

    changed
}

/// Snap rounds the edges: every piece that passes through the unit pixel of an endpoint or
/// of a rounded crossing is bent through that grid point, and this repeats until nothing
/// moves. The returned pieces meet only at shared endpoints or lie on top of each other.
pub fn split_edges(edges: &[Edge]) -> Vec<Edge> {
    let mut current = edges.to_vec();

    for round in 0..MAX_SNAP_ROUNDS {
        let pixels = hot_pixels(&current);
        let mut next = Vec::with_capacity(current.len());
        let changed = snap_to_pixels(&current, &pixels, &mut next);

        current = next;

        if !changed {
            log::trace!("snap rounding settled after {} rounds, {} pieces", round + 1, current.len());
            return current;
        }
    }

    log::warn!(
        "snap rounding did not settle after {MAX_SNAP_ROUNDS} rounds, {} pieces",
        current.len()
    );
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(start: (i64, i64), end: (i64, i64)) -> Edge {
        Edge::new(Point::new(start.0, start.1), Point::new(end.0, end.1), PolyType::Subject)
    }

    #[test]
    fn test_round_ratio_halves_away_from_zero() {
        assert_eq!(round_ratio(0, 5, 1, 2), 3);
        assert_eq!(round_ratio(0, -5, 1, 2), -3);
        assert_eq!(round_ratio(1, 1, 1, 3), 1);
        assert_eq!(round_ratio(-1, 2, 1, 3), 0);
    }

    #[test]
    fn test_crossing_point_ignores_shared_endpoints() {
        assert_eq!(crossing_point(&edge((0, 0), (10, 10)), &edge((0, 10), (10, 0))), Some(Point::new(5, 5)));
        assert_eq!(crossing_point(&edge((0, 0), (10, 10)), &edge((10, 10), (20, 0))), None);
        assert_eq!(crossing_point(&edge((0, 0), (10, 0)), &edge((5, 0), (15, 0))), None);
    }

    #[test]
    fn test_touches_pixel_is_closed() {
        let diagonal = edge((0, 0), (10, 1));

        assert!(diagonal.touches_pixel(&Point::new(5, 1)));
        assert!(diagonal.touches_pixel(&Point::new(5, 0)));
        assert!(!diagonal.touches_pixel(&Point::new(5, 2)));
        assert!(!diagonal.touches_pixel(&Point::new(12, 1)));
    }

    #[test]
    fn test_split_at_t_junction_and_overlap() {
        let pieces = split_edges(&[edge((0, 0), (10, 0)), edge((5, 0), (5, 5)), edge((8, 0), (12, 0))]);

        assert!(pieces.contains(&edge((0, 0), (5, 0))));
        assert!(pieces.contains(&edge((5, 0), (8, 0))));
        assert!(pieces.contains(&edge((8, 0), (10, 0))));
        assert!(pieces.contains(&edge((10, 0), (12, 0))));
    }

    #[test]
    fn test_split_pieces_never_cross() {
        let input = [
            edge((18, 27), (5, 14)),
            edge((14, 16), (7, 20)),
            edge((47, 16), (4, 20)),
            edge((8, 13), (22, 0)),
            edge((12, 31), (40, 19)),
            edge((36, 36), (22, 32)),
            edge((22, 32), (27, 3)),
        ];
        let pieces = split_edges(&input);

        for (i, a) in pieces.iter().enumerate() {
            for b in &pieces[i + 1..] {
                assert_eq!(crossing_point(a, b), None, "{a:?} crosses {b:?}");
                for point in [b.start, b.end] {
                    if point != a.start && point != a.end {
                        assert!(!a.touches_pixel(&point), "{a:?} passes {point:?}");
                    }
                }
            }
        }
    }
}
