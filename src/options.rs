use crate::clipper::enums::{JoinType, PolyFillType};
use crate::constants::{FILL_RULE_TOKENS, JOIN_TYPE_TOKENS, RESULT_SHAPE_TOKENS};
use crate::error::{ClipError, Result};
use std::str::FromStr;

/// Whether boolean results come back flat or grouped into outers with their holes.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum ResultShape {
    #[default]
    Polygons,
    ExPolygons,
}

impl FromStr for PolyFillType {
    type Err = ClipError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "even_odd" => Ok(PolyFillType::EvenOdd),
            "non_zero" => Ok(PolyFillType::NonZero),
            "positive" => Ok(PolyFillType::Positive),
            "negative" => Ok(PolyFillType::Negative),
            _ => Err(ClipError::UnrecognizedOption {
                kind: "fill type",
                token: token.to_string(),
                expected: FILL_RULE_TOKENS,
            }),
        }
    }
}

impl FromStr for JoinType {
    type Err = ClipError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "jtSquare" => Ok(JoinType::Square),
            "jtMiter" => Ok(JoinType::Miter),
            "jtRound" => Ok(JoinType::Round),
            _ => Err(ClipError::UnrecognizedOption {
                kind: "join type",
                token: token.to_string(),
                expected: JOIN_TYPE_TOKENS,
            }),
        }
    }
}

impl FromStr for ResultShape {
    type Err = ClipError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "polygons" => Ok(ResultShape::Polygons),
            "expolygons" => Ok(ResultShape::ExPolygons),
            _ => Err(ClipError::UnrecognizedOption {
                kind: "result type",
                token: token.to_string(),
                expected: RESULT_SHAPE_TOKENS,
            }),
        }
    }
}

/// Absent means even-odd.
pub fn resolve_fill_rule(token: Option<&str>) -> Result<PolyFillType> {
    token.map_or(Ok(PolyFillType::EvenOdd), str::parse)
}

pub fn resolve_join_type(token: &str) -> Result<JoinType> {
    token.parse()
}

/// Absent means flat polygons. With `legacy` set, any token other than `polygons`
/// selects ex-polygons instead of failing.
pub fn resolve_result_shape(token: Option<&str>, legacy: bool) -> Result<ResultShape> {
    match token {
        None => Ok(ResultShape::Polygons),
        Some("polygons") => Ok(ResultShape::Polygons),
        Some(_) if legacy => Ok(ResultShape::ExPolygons),
        Some(token) => token.parse(),
    }
}
