use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("coordinate ({x}, {y}) exceeds the engine range of +/-{range}")]
    CoordinateOutOfRange { x: i64, y: i64, range: i64 },

    #[error("result contour through ({x}, {y}) could not be closed")]
    OpenContour { x: i64, y: i64 },
}
