use crate::clipper::error::EngineError;
use crate::clipper::utils::{area, clean_path, point_in_path, PointLocation};
use crate::geometry::point::Point;
use crate::geometry::polygon::{ExPolygon, Path, Paths};
use std::collections::BTreeMap;
use std::f64::consts::TAU;

fn direction(from: &Point<i64>, to: &Point<i64>) -> f64 {
    let delta = to.to_f64().sub(&from.to_f64());
    delta.y.atan2(delta.x)
}

/// Picks the outgoing edge at `at` that comes first clockwise from the edge just walked,
/// which keeps regions that only touch at a vertex apart.
fn next_edge(
    outgoing: &BTreeMap<Point<i64>, Vec<usize>>,
    edges: &[(Point<i64>, Point<i64>)],
    from: &Point<i64>,
    at: &Point<i64>,
) -> Option<usize> {
    let back = direction(at, from);

    outgoing
        .get(at)?
        .iter()
        .map(|&index| {
            let mut turn = back - direction(at, &edges[index].1);
            if turn <= 0.0 {
                turn += TAU;
            }
            (index, turn)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Cuts a closed walk at every repeated vertex, so each returned loop is simple.
fn split_walk(walk: Path) -> Paths {
    let mut loops = Vec::new();
    let mut stack: Path = Vec::with_capacity(walk.len());

    for point in walk {
        if let Some(position) = stack.iter().position(|p| *p == point) {
            loops.push(stack.drain(position..).collect());
        }
        stack.push(point);
    }

    loops.push(stack);
    loops
}

/// Links directed boundary edges (filled side on the left) into closed contours. Outer
/// contours come out counter-clockwise, holes clockwise.
pub fn build_paths(edges: &[(Point<i64>, Point<i64>)]) -> Result<Paths, EngineError> {
    let mut outgoing: BTreeMap<Point<i64>, Vec<usize>> = BTreeMap::new();
    for (index, (start, _)) in edges.iter().enumerate() {
        outgoing.entry(*start).or_default().push(index);
    }

    let mut used = vec![false; edges.len()];
    let mut result = Vec::new();

    for first in 0..edges.len() {
        if used[first] {
            continue;
        }

        let mut walk: Path = Vec::new();
        let mut current = first;

        loop {
            used[current] = true;
            let (start, end) = edges[current];
            walk.push(start);

            let open = EngineError::OpenContour { x: end.x, y: end.y };
            let next = next_edge(&outgoing, edges, &start, &end).ok_or(open.clone())?;

            if next == first {
                break;
            }
            if used[next] {
                return Err(open);
            }
            current = next;
        }

        for contour in split_walk(walk) {
            let cleaned = clean_path(&contour);
            if !cleaned.is_empty() && area(&cleaned) != 0.0 {
                result.push(cleaned);
            }
        }
    }

    Ok(result)
}

fn contains_path(outer: &[Point<i64>], hole: &[Point<i64>]) -> bool {
    for point in hole {
        match point_in_path(point, outer) {
            PointLocation::Inside => return true,
            PointLocation::Outside => return false,
            PointLocation::OnBoundary => continue,
        }
    }

    // every hole vertex lies on the outer boundary
    area(outer).abs() > area(hole).abs()
}

/// Groups flat contours into outer boundaries with their holes. Each hole goes to the
/// smallest outer contour that contains it.
pub fn build_ex_polygons(paths: Paths) -> Vec<ExPolygon> {
    let (outers, holes): (Paths, Paths) = paths.into_iter().partition(|path| area(path) > 0.0);
    let outer_areas: Vec<f64> = outers.iter().map(|path| area(path)).collect();
    let mut result: Vec<ExPolygon> = outers.into_iter().map(ExPolygon::new).collect();

    for hole in holes {
        let owner = result
            .iter()
            .enumerate()
            .filter(|(_, polygon)| contains_path(&polygon.outer, &hole))
            .min_by(|a, b| outer_areas[a.0].total_cmp(&outer_areas[b.0]))
            .map(|(index, _)| index);

        match owner {
            Some(index) => result[index].holes.push(hole),
            None => log::warn!(
                "dropping hole with {} points that no outer contour contains",
                hole.len()
            ),
        }
    }

    result
}
