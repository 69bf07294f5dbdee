use crate::clip_config::ClipConfig;
use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::utils as clipper_utils;
use crate::error::{ClipError, Result};
use crate::geometry::polygon::Path;
use crate::marshal::{
    parse_polygon, parse_polygon_set, render_ex_polygons, render_polygon_set, HostPolygon, HostValue,
};
use crate::options::{resolve_fill_rule, resolve_join_type, resolve_result_shape, ResultShape};
use crate::scaler::Scale;

#[derive(Debug, Clone, PartialEq)]
pub enum ClipResult {
    Polygons(Vec<HostPolygon>),
    /// Each entry is `[outer, hole1, hole2, ...]`.
    ExPolygons(Vec<Vec<HostPolygon>>),
}

impl ClipResult {
    pub fn len(&self) -> usize {
        match self {
            ClipResult::Polygons(polygons) => polygons.len(),
            ClipResult::ExPolygons(regions) => regions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates subject and clip geometry in engine coordinates and runs boolean and offset
/// operations on it. Geometry is scaled when it is added, so changing the scale afterwards
/// only affects new input and the rendering of results.
#[derive(Debug, Clone)]
pub struct ClipSession {
    clipper: Clipper,
    scale: Scale,
    arc_tolerance: f64,
    legacy_result_shape: bool,
}

impl Default for ClipSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipSession {
    pub fn new() -> Self {
        Self {
            clipper: Clipper::new(),
            scale: Scale::default(),
            arc_tolerance: 0.0,
            legacy_result_shape: false,
        }
    }

    pub fn with_config(config: ClipConfig) -> Result<Self> {
        Ok(Self {
            clipper: Clipper::new(),
            scale: Scale::new(config.scale)?,
            arc_tolerance: config.arc_tolerance.max(0.0),
            legacy_result_shape: config.legacy_result_shape,
        })
    }

    pub fn config(&self) -> ClipConfig {
        ClipConfig {
            scale: self.scale.value(),
            arc_tolerance: self.arc_tolerance,
            legacy_result_shape: self.legacy_result_shape,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Already accumulated geometry is not rescaled.
    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.scale = Scale::new(scale)?;
        log::debug!("scale set to {scale}");
        Ok(())
    }

    fn add_one<V: HostValue>(&mut self, polygon: &V, poly_type: PolyType) -> Result<()> {
        let path = parse_polygon(polygon, &self.scale)?;
        log::trace!("adding {:?} polygon with {} points", poly_type, path.len());
        self.clipper.add_path(&path, poly_type)?;
        Ok(())
    }

    fn add_many<V: HostValue>(&mut self, polygons: &V, poly_type: PolyType) -> Result<()> {
        let paths = parse_polygon_set(polygons, &self.scale)?;
        log::trace!("adding {} {:?} polygons", paths.len(), poly_type);
        self.clipper.add_paths(&paths, poly_type)?;
        Ok(())
    }

    pub fn add_subject_polygon<V: HostValue>(&mut self, polygon: &V) -> Result<()> {
        self.add_one(polygon, PolyType::Subject)
    }

    pub fn add_clip_polygon<V: HostValue>(&mut self, polygon: &V) -> Result<()> {
        self.add_one(polygon, PolyType::Clip)
    }

    /// All or nothing: a malformed polygon leaves the subject set unchanged.
    pub fn add_subject_polygons<V: HostValue>(&mut self, polygons: &V) -> Result<()> {
        self.add_many(polygons, PolyType::Subject)
    }

    pub fn add_clip_polygons<V: HostValue>(&mut self, polygons: &V) -> Result<()> {
        self.add_many(polygons, PolyType::Clip)
    }

    pub fn clear(&mut self) {
        self.clipper.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.clipper.is_empty()
    }

    /// Accumulated subject geometry, in engine coordinates.
    pub fn subject_paths(&self) -> &[Path] {
        self.clipper.paths(PolyType::Subject)
    }

    pub fn clip_paths(&self) -> &[Path] {
        self.clipper.paths(PolyType::Clip)
    }

    /// Runs a boolean operation on the accumulated geometry. Missing tokens default to
    /// even-odd fills and a flat polygon result. Tokens are resolved before the engine
    /// runs, so a bad token changes nothing.
    pub fn execute(
        &self,
        clip_type: ClipType,
        subject_fill: Option<&str>,
        clip_fill: Option<&str>,
        result_shape: Option<&str>,
    ) -> Result<ClipResult> {
        let subject_fill = resolve_fill_rule(subject_fill)?;
        let clip_fill = resolve_fill_rule(clip_fill)?;
        let result_shape = resolve_result_shape(result_shape, self.legacy_result_shape)?;

        self.execute_with(clip_type, subject_fill, clip_fill, result_shape)
    }

    pub fn execute_with(
        &self,
        clip_type: ClipType,
        subject_fill: PolyFillType,
        clip_fill: PolyFillType,
        result_shape: ResultShape,
    ) -> Result<ClipResult> {
        log::debug!(
            "{:?}: {} subject and {} clip polygons, fills {:?}/{:?}",
            clip_type,
            self.subject_paths().len(),
            self.clip_paths().len(),
            subject_fill,
            clip_fill
        );

        let result = match result_shape {
            ResultShape::Polygons => {
                let paths = self.clipper.execute(clip_type, subject_fill, clip_fill)?;
                ClipResult::Polygons(render_polygon_set(&paths, &self.scale))
            }
            ResultShape::ExPolygons => {
                let regions = self.clipper.execute_ex(clip_type, subject_fill, clip_fill)?;
                ClipResult::ExPolygons(render_ex_polygons(&regions, &self.scale))
            }
        };

        log::debug!("{:?} produced {} {:?}", clip_type, result.len(), result_shape);
        Ok(result)
    }

    pub fn intersection(
        &self,
        subject_fill: Option<&str>,
        clip_fill: Option<&str>,
        result_shape: Option<&str>,
    ) -> Result<ClipResult> {
        self.execute(ClipType::Intersection, subject_fill, clip_fill, result_shape)
    }

    pub fn union(
        &self,
        subject_fill: Option<&str>,
        clip_fill: Option<&str>,
        result_shape: Option<&str>,
    ) -> Result<ClipResult> {
        self.execute(ClipType::Union, subject_fill, clip_fill, result_shape)
    }

    pub fn difference(
        &self,
        subject_fill: Option<&str>,
        clip_fill: Option<&str>,
        result_shape: Option<&str>,
    ) -> Result<ClipResult> {
        self.execute(ClipType::Difference, subject_fill, clip_fill, result_shape)
    }

    pub fn xor(
        &self,
        subject_fill: Option<&str>,
        clip_fill: Option<&str>,
        result_shape: Option<&str>,
    ) -> Result<ClipResult> {
        self.execute(ClipType::Xor, subject_fill, clip_fill, result_shape)
    }

    /// Offsets an explicit polygon set; the accumulated geometry is not involved.
    /// `delta` and `miter_limit` are in host units. A `miter_limit` of zero or less
    /// allows miters up to twice `delta`.
    pub fn offset<V: HostValue>(
        &self,
        polygons: &V,
        delta: f64,
        join_type: &str,
        miter_limit: Option<f64>,
    ) -> Result<Vec<HostPolygon>> {
        let join_type = resolve_join_type(join_type)?;

        if !delta.is_finite() {
            return Err(ClipError::InputShape(format!(
                "offset delta must be a finite number, got {delta}"
            )));
        }

        let paths = parse_polygon_set(polygons, &self.scale)?;
        let miter_limit = miter_limit.unwrap_or(0.0);
        let offsetter = ClipperOffset::new(
            join_type,
            self.scale.scale_length(miter_limit),
            self.scale.scale_length(self.arc_tolerance),
        );

        log::debug!(
            "offsetting {} polygons by {delta} with {:?} joins",
            paths.len(),
            join_type
        );

        let result = offsetter.execute(&paths, self.scale.scale_length(delta))?;
        Ok(render_polygon_set(&result, &self.scale))
    }

    /// Signed area in host units: positive for counter-clockwise polygons.
    pub fn area<V: HostValue>(&self, polygon: &V) -> Result<f64> {
        let path = parse_polygon(polygon, &self.scale)?;
        Ok(self.scale.unscale_area(clipper_utils::area(&path)))
    }

    /// `true` for counter-clockwise polygons (y axis up).
    pub fn orientation<V: HostValue>(&self, polygon: &V) -> Result<bool> {
        let path = parse_polygon(polygon, &self.scale)?;
        Ok(clipper_utils::orientation(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_session_is_empty_with_default_scale() {
        let session = ClipSession::new();

        assert!(session.is_empty());
        assert_eq!(session.scale(), 1048576.0);
        assert_eq!(session.config(), ClipConfig::default());
    }

    #[test]
    fn test_with_config_validates_scale() {
        let config = ClipConfig::default().with_scale(-1.0);

        assert_eq!(ClipSession::with_config(config).unwrap_err(), ClipError::InvalidScale(-1.0));
    }

    #[test]
    fn test_set_scale_does_not_rescale_accumulated_geometry() {
        let mut session = ClipSession::with_config(ClipConfig::default().with_scale(10.0)).unwrap();
        session.add_subject_polygon(&json!([[0, 0], [1, 0], [1, 1]])).unwrap();

        session.set_scale(100.0).unwrap();
        session.add_subject_polygon(&json!([[0, 0], [1, 0], [1, 1]])).unwrap();

        assert_eq!(session.subject_paths()[0][1].x, 10);
        assert_eq!(session.subject_paths()[1][1].x, 100);
        assert!(session.set_scale(0.0).is_err());
        assert_eq!(session.scale(), 100.0);
    }

    #[test]
    fn test_bad_token_leaves_state_unchanged() {
        let mut session = ClipSession::new();
        session.add_subject_polygon(&json!([[0, 0], [10, 0], [10, 10], [0, 10]])).unwrap();

        assert!(matches!(
            session.union(Some("winding"), None, None),
            Err(ClipError::UnrecognizedOption { kind: "fill type", .. })
        ));
        assert_eq!(session.subject_paths().len(), 1);
    }

    #[test]
    fn test_offset_rejects_join_type_before_geometry() {
        let session = ClipSession::new();

        assert!(matches!(
            session.offset(&json!("not polygons"), 1.0, "jtBevel", None),
            Err(ClipError::UnrecognizedOption { kind: "join type", .. })
        ));
        assert!(matches!(
            session.offset(&json!([]), f64::NAN, "jtRound", None),
            Err(ClipError::InputShape(_))
        ));
    }
}
