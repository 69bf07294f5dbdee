use wasm_bindgen::prelude::*;

pub mod clip_config;
pub mod clip_session;
pub mod clipper;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod marshal;
pub mod options;
pub mod scaler;
pub mod utils;
pub mod wasm_clipper;

pub use crate::clip_config::ClipConfig;
pub use crate::clip_session::{ClipResult, ClipSession};
pub use crate::clipper::enums::{ClipType, JoinType, PolyFillType};
pub use crate::error::ClipError;
pub use crate::marshal::{HostPoint, HostPolygon, HostValue};
pub use crate::options::ResultShape;
pub use crate::scaler::Scale;
pub use crate::wasm_clipper::WasmClipper;

use crate::utils::wasm_logger;

/// Routes `log` output to the browser console. `level` is one of `off`, `error`, `warn`,
/// `info`, `debug`, `trace`; anything else means `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    wasm_logger::install(wasm_logger::parse_level(level.as_deref()));
}
