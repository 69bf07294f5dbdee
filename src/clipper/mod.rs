// Clipper module - integer polygon clipping and offsetting
// Boolean operations on scaled integer paths, offset outlines and related utilities

pub mod clipper;
pub mod clipper_offset;
pub mod constants;
pub mod edge;
pub mod enums;
pub mod error;
pub mod out_rec;
pub mod utils;
pub mod winding;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items for convenience
pub use clipper::Clipper;
pub use clipper_offset::ClipperOffset;
pub use constants::*;
pub use enums::*;
pub use error::EngineError;
