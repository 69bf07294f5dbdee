/// Default multiplier between host coordinates and engine coordinates (2^20).
pub const DEFAULT_SCALE: f64 = 1048576.0;

pub const FILL_RULE_TOKENS: &str = "even_odd, non_zero, positive, negative";

pub const JOIN_TYPE_TOKENS: &str = "jtSquare, jtMiter, jtRound";

pub const RESULT_SHAPE_TOKENS: &str = "polygons, expolygons";

pub const POLYGON_FORMAT: &str = "Polygons have format: [[p0_x, p0_y], [p1_x, p1_y], ...]";
