//! Conversion between host nested sequences (`[[x, y], ...]`) and engine paths.
//!
//! Every host representation goes through [`HostValue`]; the crate implements it for
//! `serde_json::Value` here and for `JsValue` in the wasm binding.

use crate::constants::POLYGON_FORMAT;
use crate::error::{ClipError, Result};
use crate::geometry::point::Point;
use crate::geometry::polygon::{ExPolygon, Path};
use crate::scaler::Scale;
use serde_json::Value;
use std::borrow::Cow;

pub type HostPoint = [f64; 2];

pub type HostPolygon = Vec<HostPoint>;

/// Read access to a dynamically typed host value.
pub trait HostValue: Clone {
    /// The elements, if the value is an ordered sequence.
    fn as_sequence(&self) -> Option<Cow<'_, [Self]>>;

    fn as_number(&self) -> Option<f64>;

    /// Short type name used in error messages.
    fn describe(&self) -> String;
}

impl HostValue for Value {
    fn as_sequence(&self) -> Option<Cow<'_, [Self]>> {
        self.as_array().map(|items| Cow::Borrowed(items.as_slice()))
    }

    fn as_number(&self) -> Option<f64> {
        self.as_f64()
    }

    fn describe(&self) -> String {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }
}

fn shape_error(location: String, problem: String) -> ClipError {
    ClipError::InputShape(format!("{location}: {problem}. {POLYGON_FORMAT}"))
}

fn parse_point<V: HostValue>(value: &V, scale: &Scale, location: &dyn Fn() -> String) -> Result<Point<i64>> {
    let pair = value.as_sequence().ok_or_else(|| {
        shape_error(location(), format!("expected an [x, y] pair, got {}", value.describe()))
    })?;

    if pair.len() != 2 {
        return Err(shape_error(
            location(),
            format!("expected an [x, y] pair, got {} elements", pair.len()),
        ));
    }

    let mut coords = [0.0; 2];
    for (coord, item) in coords.iter_mut().zip(pair.iter()) {
        *coord = match item.as_number() {
            Some(number) if number.is_finite() => number,
            Some(number) => return Err(shape_error(location(), format!("coordinate {number} is not finite"))),
            None => {
                return Err(shape_error(
                    location(),
                    format!("coordinate must be a number, got {}", item.describe()),
                ))
            }
        };
    }

    Ok(scale.to_fixed_point(coords[0], coords[1]))
}

fn parse_indexed_polygon<V: HostValue>(value: &V, scale: &Scale, polygon_index: Option<usize>) -> Result<Path> {
    let polygon_name = || match polygon_index {
        Some(index) => format!("polygon {index}"),
        None => "polygon".to_string(),
    };

    let points = value.as_sequence().ok_or_else(|| {
        shape_error(
            polygon_name(),
            format!("expected a sequence of points, got {}", value.describe()),
        )
    })?;

    points
        .iter()
        .enumerate()
        .map(|(point_index, point)| {
            parse_point(point, scale, &|| format!("{}, point {point_index}", polygon_name()))
        })
        .collect()
}

/// Converts one host polygon, scaling every coordinate. Points keep their input order;
/// nothing is deduplicated or closed.
pub fn parse_polygon<V: HostValue>(value: &V, scale: &Scale) -> Result<Path> {
    parse_indexed_polygon(value, scale, None)
}

/// Converts a host polygon set. Fails on the first malformed polygon, before returning
/// anything.
pub fn parse_polygon_set<V: HostValue>(value: &V, scale: &Scale) -> Result<Vec<Path>> {
    let polygons = value.as_sequence().ok_or_else(|| {
        shape_error(
            "polygon set".to_string(),
            format!("expected a sequence of polygons, got {}", value.describe()),
        )
    })?;

    polygons
        .iter()
        .enumerate()
        .map(|(index, polygon)| parse_indexed_polygon(polygon, scale, Some(index)))
        .collect()
}

pub fn render_path(path: &Path, scale: &Scale) -> HostPolygon {
    path.iter().map(|point| scale.to_real_point(point)).collect()
}

pub fn render_polygon_set(paths: &[Path], scale: &Scale) -> Vec<HostPolygon> {
    paths.iter().map(|path| render_path(path, scale)).collect()
}

/// Each region becomes `[outer, hole1, hole2, ...]`.
pub fn render_ex_polygons(regions: &[ExPolygon], scale: &Scale) -> Vec<Vec<HostPolygon>> {
    regions
        .iter()
        .map(|region| {
            std::iter::once(&region.outer)
                .chain(region.holes.iter())
                .map(|path| render_path(path, scale))
                .collect()
        })
        .collect()
}
