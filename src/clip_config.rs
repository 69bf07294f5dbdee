use crate::constants::DEFAULT_SCALE;

/// Per-session settings. Lengths are in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig {
    pub scale: f64,
    /// Largest allowed distance between a round join and the true arc; `0` picks it
    /// from the offset distance.
    pub arc_tolerance: f64,
    /// Treat any result-shape token other than `polygons` as `expolygons` instead of
    /// rejecting it.
    pub legacy_result_shape: bool,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            arc_tolerance: 0.0,
            legacy_result_shape: false,
        }
    }
}

impl ClipConfig {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_arc_tolerance(mut self, arc_tolerance: f64) -> Self {
        self.arc_tolerance = arc_tolerance;
        self
    }

    pub fn with_legacy_result_shape(mut self, legacy_result_shape: bool) -> Self {
        self.legacy_result_shape = legacy_result_shape;
        self
    }
}
