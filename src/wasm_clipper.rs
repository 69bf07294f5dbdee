use crate::clip_config::ClipConfig;
use crate::clip_session::{ClipResult, ClipSession};
use crate::marshal::{HostPoint, HostPolygon, HostValue};
use std::borrow::Cow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;

impl HostValue for JsValue {
    fn as_sequence(&self) -> Option<Cow<'_, [Self]>> {
        self.dyn_ref::<Array>()
            .map(|array| Cow::Owned(array.iter().collect()))
    }

    fn as_number(&self) -> Option<f64> {
        self.as_f64()
    }

    fn describe(&self) -> String {
        if self.is_null() {
            "null".to_string()
        } else if Array::is_array(self) {
            "array".to_string()
        } else {
            self.js_typeof().as_string().unwrap_or_default()
        }
    }
}

fn point_to_js(point: &HostPoint) -> JsValue {
    Array::of2(&JsValue::from_f64(point[0]), &JsValue::from_f64(point[1])).into()
}

fn polygon_to_js(polygon: &HostPolygon) -> JsValue {
    polygon.iter().map(point_to_js).collect::<Array>().into()
}

fn polygons_to_js(polygons: &[HostPolygon]) -> JsValue {
    polygons.iter().map(polygon_to_js).collect::<Array>().into()
}

fn result_to_js(result: &ClipResult) -> JsValue {
    match result {
        ClipResult::Polygons(polygons) => polygons_to_js(polygons),
        ClipResult::ExPolygons(regions) => regions
            .iter()
            .map(|region| polygons_to_js(region))
            .collect::<Array>()
            .into(),
    }
}

/// JS facing clipper. Polygons are arrays of `[x, y]` pairs; fill types, join types and
/// result types are passed as string tokens.
#[wasm_bindgen(js_name = Clipper)]
pub struct WasmClipper {
    session: ClipSession,
}

#[wasm_bindgen(js_class = Clipper)]
impl WasmClipper {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: ClipSession::new(),
        }
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(multiplier: f64, arc_tolerance: f64, legacy_result_shape: bool) -> Result<WasmClipper, JsError> {
        let config = ClipConfig::default()
            .with_scale(multiplier)
            .with_arc_tolerance(arc_tolerance)
            .with_legacy_result_shape(legacy_result_shape);

        Ok(Self {
            session: ClipSession::with_config(config)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn multiplier(&self) -> f64 {
        self.session.scale()
    }

    #[wasm_bindgen(js_name = setMultiplier)]
    pub fn set_multiplier(&mut self, multiplier: f64) -> Result<(), JsError> {
        Ok(self.session.set_scale(multiplier)?)
    }

    #[wasm_bindgen(js_name = addSubjectPolygon)]
    pub fn add_subject_polygon(&mut self, polygon: JsValue) -> Result<(), JsError> {
        Ok(self.session.add_subject_polygon(&polygon)?)
    }

    #[wasm_bindgen(js_name = addClipPolygon)]
    pub fn add_clip_polygon(&mut self, polygon: JsValue) -> Result<(), JsError> {
        Ok(self.session.add_clip_polygon(&polygon)?)
    }

    #[wasm_bindgen(js_name = addSubjectPolygons)]
    pub fn add_subject_polygons(&mut self, polygons: JsValue) -> Result<(), JsError> {
        Ok(self.session.add_subject_polygons(&polygons)?)
    }

    #[wasm_bindgen(js_name = addClipPolygons)]
    pub fn add_clip_polygons(&mut self, polygons: JsValue) -> Result<(), JsError> {
        Ok(self.session.add_clip_polygons(&polygons)?)
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    pub fn intersection(
        &self,
        subject_fill: Option<String>,
        clip_fill: Option<String>,
        result_type: Option<String>,
    ) -> Result<JsValue, JsError> {
        let result = self.session.intersection(
            subject_fill.as_deref(),
            clip_fill.as_deref(),
            result_type.as_deref(),
        )?;
        Ok(result_to_js(&result))
    }

    pub fn union(
        &self,
        subject_fill: Option<String>,
        clip_fill: Option<String>,
        result_type: Option<String>,
    ) -> Result<JsValue, JsError> {
        let result = self
            .session
            .union(subject_fill.as_deref(), clip_fill.as_deref(), result_type.as_deref())?;
        Ok(result_to_js(&result))
    }

    pub fn difference(
        &self,
        subject_fill: Option<String>,
        clip_fill: Option<String>,
        result_type: Option<String>,
    ) -> Result<JsValue, JsError> {
        let result = self.session.difference(
            subject_fill.as_deref(),
            clip_fill.as_deref(),
            result_type.as_deref(),
        )?;
        Ok(result_to_js(&result))
    }

    pub fn xor(
        &self,
        subject_fill: Option<String>,
        clip_fill: Option<String>,
        result_type: Option<String>,
    ) -> Result<JsValue, JsError> {
        let result = self
            .session
            .xor(subject_fill.as_deref(), clip_fill.as_deref(), result_type.as_deref())?;
        Ok(result_to_js(&result))
    }

    #[wasm_bindgen(js_name = offsetPolygons)]
    pub fn offset_polygons(
        &self,
        polygons: JsValue,
        delta: f64,
        join_type: &str,
        miter_limit: Option<f64>,
    ) -> Result<JsValue, JsError> {
        let result = self.session.offset(&polygons, delta, join_type, miter_limit)?;
        Ok(polygons_to_js(&result))
    }

    pub fn area(&self, polygon: JsValue) -> Result<f64, JsError> {
        Ok(self.session.area(&polygon)?)
    }

    pub fn orientation(&self, polygon: JsValue) -> Result<bool, JsError> {
        Ok(self.session.orientation(&polygon)?)
    }
}

impl Default for WasmClipper {
    fn default() -> Self {
        Self::new()
    }
}
