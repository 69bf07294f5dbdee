use crate::clipper::edge::Edge;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::geometry::point::Point;
use std::collections::BTreeMap;

/// Decides which side of a boundary is filled, from the winding numbers of both operands.
#[derive(Debug, Clone, Copy)]
pub struct WindingRule {
    clip_type: ClipType,
    subject_fill: PolyFillType,
    clip_fill: PolyFillType,
}

impl WindingRule {
    pub fn new(clip_type: ClipType, subject_fill: PolyFillType, clip_fill: PolyFillType) -> Self {
        Self {
            clip_type,
            subject_fill,
            clip_fill,
        }
    }

    pub fn is_inside(&self, winding: [i32; 2]) -> bool {
        self.clip_type.apply(
            self.subject_fill.is_filled(winding[PolyType::Subject as usize]),
            self.clip_fill.is_filled(winding[PolyType::Clip as usize]),
        )
    }
}

/// Contribution of one edge to the winding number of `origin`, counted along a ray to +x.
#[inline(always)]
fn crossing(start: &Point<i128>, end: &Point<i128>, origin: &Point<i128>) -> i32 {
    let side = end.sub(start).cross(&origin.sub(start));

    if start.y <= origin.y {
        if end.y > origin.y && side > 0 {
            return 1;
        }
    } else if end.y <= origin.y && side < 0 {
        return -1;
    }

    0
}

/// Coordinates doubled so segment midpoints stay on the grid. Horizontal segments are
/// evaluated in a frame turned by 90 degrees, which keeps windings and sides unchanged.
#[inline(always)]
fn frame(point: &Point<i64>, turned: bool) -> Point<i128> {
    let point = point.widen().scale_up(2);

    if turned {
        Point::new(-point.y, point.x)
    } else {
        point
    }
}

/// Edges bucketed by the `y` range they span in one frame, so a ray along +x only has to
/// look at the edges of the band its origin falls in.
struct BandIndex {
    framed: Vec<(Point<i128>, Point<i128>)>,
    min_y: i128,
    max_y: i128,
    band_height: i128,
    bands: Vec<Vec<usize>>,
}

impl BandIndex {
    fn new(edges: &[Edge], turned: bool) -> Self {
        let framed: Vec<(Point<i128>, Point<i128>)> = edges
            .iter()
            .map(|edge| (frame(&edge.start, turned), frame(&edge.end, turned)))
            .collect();
        let min_y = framed.iter().map(|(start, end)| start.y.min(end.y)).min().unwrap_or(0);
        let max_y = framed.iter().map(|(start, end)| start.y.max(end.y)).max().unwrap_or(0);
        let band_count = ((edges.len() as f64).sqrt().ceil() as usize).max(1);
        let band_height = (max_y - min_y) / band_count as i128 + 1;
        let mut bands = vec![Vec::new(); band_count];

        for (index, (start, end)) in framed.iter().enumerate() {
            let low = ((start.y.min(end.y) - min_y) / band_height) as usize;
            let high = ((start.y.max(end.y) - min_y) / band_height) as usize;

            for band in &mut bands[low..=high] {
                band.push(index);
            }
        }

        Self {
            framed,
            min_y,
            max_y,
            band_height,
            bands,
        }
    }

    fn candidates(&self, y: i128) -> &[usize] {
        if y < self.min_y || y > self.max_y {
            return &[];
        }

        &self.bands[((y - self.min_y) / self.band_height) as usize]
    }
}

/// Directed boundary of the filled region, filled side on the left. `edges` must only
/// meet at endpoints (see [`split_edges`](crate::clipper::edge::split_edges)).
pub fn boundary_edges(edges: &[Edge], rule: &WindingRule) -> Vec<(Point<i64>, Point<i64>)> {
    // net count of edges running low -> high on each segment, per operand
    let mut segments: BTreeMap<(Point<i64>, Point<i64>), [i32; 2]> = BTreeMap::new();
    for edge in edges {
        let key = edge.key();
        let forward = segments.entry(key).or_default();
        forward[edge.poly_type as usize] += if edge.start == key.0 { 1 } else { -1 };
    }

    let indices = [BandIndex::new(edges, false), BandIndex::new(edges, true)];
    let mut result = Vec::new();

    for ((low, high), forward) in segments {
        let turned = low.y == high.y;
        let index = &indices[turned as usize];
        let start = frame(&low, turned);
        let end = frame(&high, turned);
        let sum = start.add(&end);
        let origin = Point::new(sum.x / 2, sum.y / 2);
        let rising = end.y > start.y;

        // windings just to the +x side of the segment, and the step across it
        let mut plus_x = [0i32; 2];
        let step = if rising {
            forward
        } else {
            [-forward[0], -forward[1]]
        };

        for &candidate in index.candidates(origin.y) {
            let edge = &edges[candidate];
            if edge.key() != (low, high) {
                let (edge_start, edge_end) = &index.framed[candidate];
                plus_x[edge.poly_type as usize] += crossing(edge_start, edge_end, &origin);
            }
        }

        let minus_x = [plus_x[0] + step[0], plus_x[1] + step[1]];
        let (left, right) = if rising {
            (minus_x, plus_x)
        } else {
            (plus_x, minus_x)
        };

        let inside_left = rule.is_inside(left);
        if inside_left != rule.is_inside(right) {
            if inside_left {
                result.push((low, high));
            } else {
                result.push((high, low));
            }
        }
    }

    result
}
