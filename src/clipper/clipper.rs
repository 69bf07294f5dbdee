use crate::clipper::{
    constants::COORD_RANGE,
    edge::{collect_edges, split_edges},
    enums::{ClipType, PolyFillType, PolyType},
    error::EngineError,
    out_rec::{build_ex_polygons, build_paths},
    winding::{boundary_edges, WindingRule},
};
use crate::geometry::polygon::{ExPolygon, Path, Paths};

/// Boolean clipping engine on integer coordinates. Holds the subject and clip operands
/// until [`Clipper::clear`]; executing never modifies them.
#[derive(Debug, Clone, Default)]
pub struct Clipper {
    subject: Paths,
    clip: Paths,
}

impl Clipper {
    pub fn new() -> Self {
        Self {
            subject: Vec::new(),
            clip: Vec::new(),
        }
    }

    fn check_range(path: &Path) -> Result<(), EngineError> {
        match path.iter().find(|point| {
            point.x < -COORD_RANGE || point.x > COORD_RANGE || point.y < -COORD_RANGE || point.y > COORD_RANGE
        }) {
            Some(point) => Err(EngineError::CoordinateOutOfRange {
                x: point.x,
                y: point.y,
                range: COORD_RANGE,
            }),
            None => Ok(()),
        }
    }

    fn operand_mut(&mut self, poly_type: PolyType) -> &mut Paths {
        match poly_type {
            PolyType::Subject => &mut self.subject,
            PolyType::Clip => &mut self.clip,
        }
    }

    pub fn add_path(&mut self, polygon: &Path, poly_type: PolyType) -> Result<(), EngineError> {
        Self::check_range(polygon)?;
        self.operand_mut(poly_type).push(polygon.clone());
        Ok(())
    }

    /// Adds all paths or none of them.
    pub fn add_paths(&mut self, polygons: &[Path], poly_type: PolyType) -> Result<(), EngineError> {
        for polygon in polygons {
            Self::check_range(polygon)?;
        }
        self.operand_mut(poly_type).extend_from_slice(polygons);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.subject.clear();
        self.clip.clear();
    }

    pub fn paths(&self, poly_type: PolyType) -> &[Path] {
        match poly_type {
            PolyType::Subject => &self.subject,
            PolyType::Clip => &self.clip,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_empty() && self.clip.is_empty()
    }

    /// Flat result: outer contours counter-clockwise, holes clockwise.
    pub fn execute(
        &self,
        clip_type: ClipType,
        subject_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> Result<Paths, EngineError> {
        let mut edges = Vec::new();
        collect_edges(&self.subject, PolyType::Subject, &mut edges);
        collect_edges(&self.clip, PolyType::Clip, &mut edges);

        let edges = split_edges(&edges);
        let rule = WindingRule::new(clip_type, subject_fill_type, clip_fill_type);

        build_paths(&boundary_edges(&edges, &rule))
    }

    pub fn execute_ex(
        &self,
        clip_type: ClipType,
        subject_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> Result<Vec<ExPolygon>, EngineError> {
        let paths = self.execute(clip_type, subject_fill_type, clip_fill_type)?;
        Ok(build_ex_polygons(paths))
    }
}
