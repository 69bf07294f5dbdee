use crate::clipper::clipper::Clipper;
use crate::clipper::constants::{
    AUTO_ARC_TOLERANCE, COLLINEAR_TOLERANCE, DEFAULT_MITER_LIMIT, MAX_ARC_TOLERANCE, OUTER_BOUNDS_MARGIN,
};
use crate::clipper::enums::{ClipType, JoinType, PolyFillType, PolyType};
use crate::clipper::error::EngineError;
use crate::clipper::utils::area;
use crate::geometry::point::Point;
use crate::geometry::polygon::{Path, Paths};
use crate::utils::math::cycle_index;
use std::f64::consts::PI;

/// Grows (positive delta) or shrinks (negative delta) closed paths. Counter-clockwise paths
/// are treated as outers, clockwise paths as holes.
pub struct ClipperOffset {
    join_type: JoinType,
    miter_limit: f64,
    arc_tolerance: f64,
}

impl ClipperOffset {
    /// `miter_limit` is the longest distance, in engine units, a miter tip may reach from
    /// the original vertex; zero or less picks twice the offset distance. `arc_tolerance`
    /// bounds how far round joins stray from the true arc; zero or less picks a fraction
    /// of the offset distance.
    pub fn new(join_type: JoinType, miter_limit: f64, arc_tolerance: f64) -> Self {
        Self {
            join_type,
            miter_limit,
            arc_tolerance,
        }
    }

    pub fn execute(&self, polygons: &[Path], delta: f64) -> Result<Paths, EngineError> {
        let sources: Paths = polygons
            .iter()
            .map(|polygon| Self::format_path(polygon))
            .filter(|polygon| !polygon.is_empty())
            .collect();

        if delta == 0.0 {
            return Ok(sources.into_iter().filter(|polygon| polygon.len() >= 3).collect());
        }

        let mut outlines: Paths = Vec::with_capacity(sources.len());
        for source in &sources {
            if source.len() < 3 && delta <= 0.0 {
                continue;
            }

            let outline = self.do_offset(source, delta);
            if outline.len() >= 3 {
                outlines.push(outline);
            }
        }

        if outlines.is_empty() {
            return Ok(Vec::new());
        }

        let mut clipper = Clipper::new();
        clipper.add_paths(&outlines, PolyType::Subject)?;

        if delta > 0.0 {
            return clipper.execute(ClipType::Union, PolyFillType::Positive, PolyFillType::Positive);
        }

        clipper.add_path(&Self::get_outer_bounds(&outlines), PolyType::Subject)?;

        let mut result = clipper.execute(ClipType::Union, PolyFillType::Negative, PolyFillType::Negative)?;

        if let Some(frame_index) = result
            .iter()
            .enumerate()
            .max_by(|a, b| area(a.1).abs().total_cmp(&area(b.1).abs()))
            .map(|(index, _)| index)
        {
            result.remove(frame_index);
        }

        for path in result.iter_mut() {
            path.reverse();
        }

        Ok(result)
    }

    /// Drops repeated points and the closing duplicate. Orientation is kept: it decides
    /// which side of the path the offset goes to.
    fn format_path(polygon: &Path) -> Path {
        let mut result: Path = polygon.clone();
        result.dedup();

        while result.len() > 1 && result.first() == result.last() {
            result.pop();
        }

        result
    }

    fn miter_ratio(&self, delta: f64) -> f64 {
        if self.miter_limit <= 0.0 {
            DEFAULT_MITER_LIMIT
        } else {
            (self.miter_limit / delta.abs()).max(1.0)
        }
    }

    fn arc_tolerance(&self, delta: f64) -> f64 {
        let max_tolerance = delta.abs() * MAX_ARC_TOLERANCE;

        if self.arc_tolerance <= 0.0 {
            delta.abs() * AUTO_ARC_TOLERANCE
        } else {
            self.arc_tolerance.min(max_tolerance)
        }
    }

    fn do_offset(&self, source: &Path, delta: f64) -> Path {
        let point_count = source.len();
        let mut result = Vec::new();

        if point_count == 1 {
            let center = source[0].to_f64();

            if self.join_type == JoinType::Round {
                self.push_arc(&mut result, &center, &Point::new(1.0, 0.0), 2.0 * PI, delta);
                result.pop();
            } else {
                for corner in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                    let point = Point::new(corner.0, corner.1).scale_up(delta).add(&center);
                    result.push(point.clipper_round());
                }
            }

            return result;
        }

        let normals: Vec<Point<f64>> = (0..point_count)
            .map(|i| {
                let next = source[cycle_index(i, point_count, 1)].to_f64();
                next.sub(&source[i].to_f64()).normal().normalize()
            })
            .collect();

        let miter_threshold = 2.0 / self.miter_ratio(delta).powi(2);

        for i in 0..point_count {
            let k = cycle_index(i, point_count, -1);
            self.offset_point(&mut result, &source[i].to_f64(), &normals[k], &normals[i], delta, miter_threshold);
        }

        result
    }

    /// `normal1` belongs to the edge arriving at `point`, `normal2` to the edge leaving it.
    fn offset_point(
        &self,
        result: &mut Path,
        point: &Point<f64>,
        normal1: &Point<f64>,
        normal2: &Point<f64>,
        delta: f64,
        miter_threshold: f64,
    ) {
        let sin_a = normal1.cross(normal2).clamp(-1.0, 1.0);
        let cos_a = normal1.dot(normal2);

        if sin_a.abs() < COLLINEAR_TOLERANCE && cos_a > 0.0 {
            result.push(normal2.scale_up(delta).add(point).clipper_round());
            return;
        }

        if sin_a * delta < 0.0 {
            result.push(normal1.scale_up(delta).add(point).clipper_round());
            result.push(point.clipper_round());
            result.push(normal2.scale_up(delta).add(point).clipper_round());
            return;
        }

        // a reversal leaves sin_a at zero; the turn goes around the outside
        let angle = if sin_a.abs() < COLLINEAR_TOLERANCE {
            PI.copysign(delta)
        } else {
            sin_a.atan2(cos_a)
        };

        match self.join_type {
            JoinType::Miter if 1.0 + cos_a >= miter_threshold => {
                let q = delta / (1.0 + cos_a);
                result.push(normal1.add(normal2).scale_up(q).add(point).clipper_round());
            }
            JoinType::Round => self.push_arc(result, point, normal1, angle, delta),
            _ => {
                let dx = (angle * 0.25).tan();
                let first = normal1.add(&normal1.tangent().scale_up(dx));
                let second = normal2.sub(&normal2.tangent().scale_up(dx));

                result.push(first.scale_up(delta).add(point).clipper_round());
                result.push(second.scale_up(delta).add(point).clipper_round());
            }
        }
    }

    /// Points on the circle of radius `delta` around `center`, from `from` (a unit vector)
    /// sweeping by `angle`, both ends included.
    fn push_arc(&self, result: &mut Path, center: &Point<f64>, from: &Point<f64>, angle: f64, delta: f64) {
        let tolerance = self.arc_tolerance(delta);
        let step_limit = 2.0 * (1.0 - tolerance / delta.abs()).clamp(-1.0, 1.0).acos();
        let steps = (angle.abs() / step_limit).ceil().max(1.0) as usize;

        for step in 0..=steps {
            let (sin, cos) = (angle * step as f64 / steps as f64).sin_cos();
            let direction = Point::new(from.x * cos - from.y * sin, from.x * sin + from.y * cos);

            result.push(direction.scale_up(delta).add(center).clipper_round());
        }
    }

    /// Clockwise frame around every outline, so a negative-fill union turns the shrunk
    /// outlines into holes of the frame.
    fn get_outer_bounds(paths: &Paths) -> Path {
        let mut min = Point::new(i64::MAX, i64::MAX);
        let mut max = Point::new(i64::MIN, i64::MIN);

        for point in paths.iter().flatten() {
            min = min.min_with(point);
            max = max.max_with(point);
        }

        let left = min.x - OUTER_BOUNDS_MARGIN;
        let right = max.x + OUTER_BOUNDS_MARGIN;
        let bottom = min.y - OUTER_BOUNDS_MARGIN;
        let top = max.y + OUTER_BOUNDS_MARGIN;

        vec![
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, bottom),
        ]
    }
}
