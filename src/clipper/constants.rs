/// Largest absolute coordinate the engine accepts; keeps every intermediate product inside `i128`
/// and every coordinate exactly representable as `f64`.
pub const COORD_RANGE: i64 = (1 << 53) - 1;

/// Miter limit, as a multiple of the offset distance, used when the caller passes none.
pub const DEFAULT_MITER_LIMIT: f64 = 2.0;

/// Arc tolerance, as a fraction of the offset distance, used when the caller passes none.
pub const AUTO_ARC_TOLERANCE: f64 = 0.002;

pub const MAX_ARC_TOLERANCE: f64 = 0.25;

/// Gap between the offset outlines and the frame used to invert a shrinking offset.
pub const OUTER_BOUNDS_MARGIN: i64 = 10;

pub const COLLINEAR_TOLERANCE: f64 = 1e-12;

/// Upper bound on snap rounding passes over the split edges.
pub const MAX_SNAP_ROUNDS: usize = 32;
