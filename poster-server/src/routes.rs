//! Route table and API handlers.
//!
//! | Path                   | Method | Handler                 |
//! |------------------------|--------|-------------------------|
//! | `/`                    | GET    | redirect to the editor  |
//! | `/poster-creator`      | GET    | editor view             |
//! | `/api/toolbar`         | GET    | toolbar button tables   |
//! | `/api/templates`       | GET    | default element table   |
//! | `/api/elements`        | POST   | add element by tag      |
//! | `/api/elements/update` | POST   | patch an element        |

use std::collections::BTreeMap;

use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use poster_core::{
    default_elements, handle_add_element, update_element, ActionButton, AddOutcome, CanvasSize,
    ElementAction, ElementPatch, ElementRef, ElementTemplate, ElementType, OperationButton,
    ACTION_BUTTONS, OPERATION_BUTTONS,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::validation::{
    validate_canvas_size, validate_element_id, validate_elements, validate_patch,
    ValidationError,
};
use crate::{metrics, AppState};

/// Home path; redirects to the editor.
pub const HOME_PATH: &str = "/";

/// Editor view path.
pub const EDITOR_PATH: &str = "/poster-creator";

const EDITOR_HTML: &str = include_str!("../web/index.html");

fn rejected(err: ValidationError) -> ApiError {
    tracing::debug!("Rejected request: {err}");
    metrics::record_validation_failure(err.field());
    ApiError::from(err)
}

/// Redirect the home path to the editor.
pub async fn home() -> Redirect {
    Redirect::temporary(EDITOR_PATH)
}

/// Serve the editor view.
pub async fn editor() -> Html<&'static str> {
    Html(EDITOR_HTML)
}

/// Toolbar button tables.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarResponse {
    /// Buttons that add elements.
    pub action_buttons: &'static [ActionButton],
    /// Buttons that act on the whole poster.
    pub operation_buttons: &'static [OperationButton],
}

/// Get the toolbar button tables.
pub async fn toolbar() -> Json<ToolbarResponse> {
    Json(ToolbarResponse {
        action_buttons: &ACTION_BUTTONS,
        operation_buttons: &OPERATION_BUTTONS,
    })
}

/// Get the default element templates keyed by type.
pub async fn templates() -> Json<BTreeMap<ElementType, ElementTemplate>> {
    Json(default_elements())
}

/// Body of an add-element request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddElementRequest {
    /// Toolbar action tag (`poster`, `text`, `image`, `qrcode`, `avatar`).
    #[serde(rename = "type")]
    pub action: String,
    /// Current element list.
    #[serde(default)]
    pub elements: Vec<ElementRef>,
    /// Canvas size for the background; defaults to the configured size.
    #[serde(default)]
    pub canvas_size: Option<CanvasSize>,
}

/// Add an element for a toolbar action.
///
/// Unknown tags return the list unchanged with a `null` element. The canvas
/// size is only checked for the background, the one element that uses it.
#[tracing::instrument(name = "add_element", skip(state, request), fields(action = %request.action))]
pub async fn add_element(
    State(state): State<AppState>,
    Json(request): Json<AddElementRequest>,
) -> Result<Json<AddOutcome>, ApiError> {
    let canvas_size = request.canvas_size.unwrap_or(state.config().canvas_size);
    if request.action.parse::<ElementAction>().ok() == Some(ElementAction::Poster) {
        validate_canvas_size(canvas_size).map_err(rejected)?;
    }
    validate_elements(&request.elements).map_err(rejected)?;

    let outcome = handle_add_element(&request.action, request.elements, canvas_size);
    match &outcome.element {
        Some(element) => metrics::record_element_added(element.element_type()),
        None => metrics::record_unknown_action(),
    }
    Ok(Json(outcome))
}

/// Body of an update-element request.
#[derive(Debug, Deserialize)]
pub struct UpdateElementRequest {
    /// Current element list.
    #[serde(default)]
    pub elements: Vec<ElementRef>,
    /// ID of the element to patch.
    pub id: String,
    /// Fields to merge.
    #[serde(default)]
    pub updates: ElementPatch,
}

/// Result of an update-element request.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateElementResponse {
    /// The resulting element list.
    pub elements: Vec<ElementRef>,
}

/// Merge a patch into one element of the list.
#[tracing::instrument(name = "update_element", skip(request), fields(id = %request.id))]
pub async fn update_element_handler(
    Json(request): Json<UpdateElementRequest>,
) -> Result<Json<UpdateElementResponse>, ApiError> {
    let id = validate_element_id(&request.id).map_err(rejected)?;
    validate_elements(&request.elements).map_err(rejected)?;
    validate_patch(&request.updates).map_err(rejected)?;

    let matched = request.elements.iter().any(|e| e.id == id);
    metrics::record_element_update(matched);

    let elements = update_element(&request.elements, &id, &request.updates);
    Ok(Json(UpdateElementResponse { elements }))
}
