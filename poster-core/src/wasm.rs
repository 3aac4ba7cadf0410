//! WebAssembly bindings for poster-core.
//!
//! This module provides JavaScript-callable functions when compiled to WASM.
//! Element lists cross the boundary as JSON in the same shape the editor's
//! reactive bindings use.

use wasm_bindgen::prelude::*;

use crate::template::default_elements;
use crate::toolbar::{ACTION_BUTTONS, OPERATION_BUTTONS};
use crate::{ElementId, ElementPatch, Poster, PosterError, Size};

/// Initialize the poster WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}

fn js_error(err: &PosterError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(&PosterError::Serialization(e)))
}

/// Poster instance for WASM.
#[wasm_bindgen]
pub struct WasmPoster {
    poster: Poster,
}

#[wasm_bindgen]
impl WasmPoster {
    /// Create a poster for a canvas of the given size.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not finite and positive.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WasmPoster, JsValue> {
        let canvas_size = Size::checked_canvas(width, height).map_err(|e| js_error(&e))?;
        Ok(Self {
            poster: Poster::new(canvas_size),
        })
    }

    /// Add an element for a toolbar action tag.
    ///
    /// Returns `{element, elements}` as JSON; `element` is `null` for an
    /// unknown tag.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&mut self, action: &str) -> Result<String, JsValue> {
        let element = self.poster.add(action);
        to_json(&serde_json::json!({
            "element": element,
            "elements": self.poster.elements(),
        }))
    }

    /// Merge a JSON patch into the element with the given ID.
    ///
    /// Returns whether an element matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or patch cannot be parsed.
    #[wasm_bindgen(js_name = updateElement)]
    pub fn update_element(&mut self, id: &str, patch_json: &str) -> Result<bool, JsValue> {
        let id = ElementId::parse(id).map_err(|e| js_error(&e))?;
        let patch: ElementPatch = serde_json::from_str(patch_json)
            .map_err(|e| js_error(&PosterError::Serialization(e)))?;
        Ok(self.poster.update(&id, &patch))
    }

    /// Get the element list as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = getElementsJson)]
    pub fn get_elements_json(&self) -> Result<String, JsValue> {
        self.poster.elements_json().map_err(|e| js_error(&e))
    }

    /// Replace the element list from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an element list or holds more than
    /// one background.
    #[wasm_bindgen(js_name = setElementsJson)]
    pub fn set_elements_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.poster.set_elements_json(json).map_err(|e| js_error(&e))
    }

    /// Number of elements on the poster.
    #[wasm_bindgen(js_name = elementCount)]
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.poster.len()
    }
}

/// Element toolbar buttons as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[wasm_bindgen(js_name = actionButtonsJson)]
pub fn action_buttons_json() -> Result<String, JsValue> {
    to_json(&ACTION_BUTTONS)
}

/// Whole-poster operation buttons as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[wasm_bindgen(js_name = operationButtonsJson)]
pub fn operation_buttons_json() -> Result<String, JsValue> {
    to_json(&OPERATION_BUTTONS)
}

/// Default element templates keyed by type, as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[wasm_bindgen(js_name = defaultElementsJson)]
pub fn default_elements_json() -> Result<String, JsValue> {
    to_json(&default_elements())
}
