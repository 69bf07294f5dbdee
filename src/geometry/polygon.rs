use crate::geometry::point::Point;

/// Closed contour in engine coordinates; the closing point is implicit.
pub type Path = Vec<Point<i64>>;

pub type Paths = Vec<Path>;

/// Outer boundary with the holes it directly contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExPolygon {
    pub outer: Path,
    pub holes: Paths,
}

impl ExPolygon {
    pub fn new(outer: Path) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }
}
