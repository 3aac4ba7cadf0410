//! Element-list operations driven by toolbar and property-panel actions.
//!
//! Every operation takes the current list and returns the next one. Lists
//! hold [`ElementRef`]s, so entries an operation does not touch are shared
//! between the old and new list rather than copied.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::template::ElementTemplate;
use crate::{
    CanvasSize, ElementId, ElementPatch, ElementRef, ElementType, PosterError, PosterResult,
};

/// Result of an add operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddOutcome {
    /// The added element, the existing background for a repeated
    /// add-background, or `None` for an unknown action.
    pub element: Option<ElementRef>,
    /// The resulting element list.
    pub elements: Vec<ElementRef>,
}

/// A toolbar action that adds an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementAction {
    /// Add the poster background (idempotent).
    Poster,
    /// Add a text block.
    Text,
    /// Add an image.
    Image,
    /// Add a QR code.
    #[serde(rename = "qrcode")]
    QrCode,
    /// Add an avatar.
    Avatar,
}

impl ElementAction {
    /// Every action, in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::Poster,
        Self::Text,
        Self::Image,
        Self::QrCode,
        Self::Avatar,
    ];

    /// The wire tag for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poster => "poster",
            Self::Text => "text",
            Self::Image => "image",
            Self::QrCode => "qrcode",
            Self::Avatar => "avatar",
        }
    }

    /// The element type this action creates.
    #[must_use]
    pub const fn element_type(self) -> ElementType {
        match self {
            Self::Poster => ElementType::Background,
            Self::Text => ElementType::Text,
            Self::Image => ElementType::Image,
            Self::QrCode => ElementType::QrCode,
            Self::Avatar => ElementType::Avatar,
        }
    }

    /// Run this action against an element list.
    #[must_use]
    pub fn apply(self, elements: Vec<ElementRef>, canvas_size: CanvasSize) -> AddOutcome {
        match self {
            Self::Poster => add_background(elements, canvas_size),
            Self::Text => add_text(elements),
            Self::Image => add_image(elements),
            Self::QrCode => add_qrcode(elements),
            Self::Avatar => add_avatar(elements),
        }
    }
}

impl fmt::Display for ElementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementAction {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| PosterError::UnknownAction(s.to_string()))
    }
}

fn append_from_template(mut elements: Vec<ElementRef>, element_type: ElementType) -> AddOutcome {
    let element = Arc::new(ElementTemplate::for_type(element_type).instantiate());
    tracing::debug!(element_id = %element.id, %element_type, "Adding element");
    elements.push(Arc::clone(&element));
    AddOutcome {
        element: Some(element),
        elements,
    }
}

/// Add the poster background, sized to the canvas.
///
/// If the list already has a background it is returned with the list
/// unchanged, so a poster never has more than one.
#[must_use]
pub fn add_background(mut elements: Vec<ElementRef>, canvas_size: CanvasSize) -> AddOutcome {
    let existing = elements.iter().find(|e| e.is_background()).cloned();
    if let Some(existing) = existing {
        tracing::debug!(element_id = %existing.id, "Background already present");
        return AddOutcome {
            element: Some(existing),
            elements,
        };
    }

    let mut background = ElementTemplate::for_type(ElementType::Background).instantiate();
    background.size = canvas_size;
    let background = Arc::new(background);
    tracing::debug!(
        element_id = %background.id,
        width = canvas_size.width,
        height = canvas_size.height,
        "Adding background"
    );
    elements.push(Arc::clone(&background));
    AddOutcome {
        element: Some(background),
        elements,
    }
}

/// Check that a list holds at most one background.
///
/// The add operations keep this true on their own; lists loaded from outside
/// go through here first.
///
/// # Errors
///
/// Returns [`PosterError::DuplicateBackground`] with the background count.
pub fn check_single_background(elements: &[ElementRef]) -> PosterResult<()> {
    match elements.iter().filter(|e| e.is_background()).count() {
        0 | 1 => Ok(()),
        n => Err(PosterError::DuplicateBackground(n)),
    }
}

/// Add an avatar from the default template.
#[must_use]
pub fn add_avatar(elements: Vec<ElementRef>) -> AddOutcome {
    append_from_template(elements, ElementType::Avatar)
}

/// Add a text block from the default template.
#[must_use]
pub fn add_text(elements: Vec<ElementRef>) -> AddOutcome {
    append_from_template(elements, ElementType::Text)
}

/// Add a QR code from the default template.
#[must_use]
pub fn add_qrcode(elements: Vec<ElementRef>) -> AddOutcome {
    append_from_template(elements, ElementType::QrCode)
}

/// Add an image from the default template.
#[must_use]
pub fn add_image(elements: Vec<ElementRef>) -> AddOutcome {
    append_from_template(elements, ElementType::Image)
}

/// Merge `patch` into the element with the given ID.
///
/// Returns a new list. Non-matching entries are the same shared elements as
/// in the input. An unknown ID yields a list with unchanged content.
#[must_use]
pub fn update_element(
    elements: &[ElementRef],
    id: &ElementId,
    patch: &ElementPatch,
) -> Vec<ElementRef> {
    let mut matched = false;
    let updated: Vec<ElementRef> = elements
        .iter()
        .map(|element| {
            if element.id == *id {
                matched = true;
                Arc::new(patch.apply_to(element))
            } else {
                Arc::clone(element)
            }
        })
        .collect();

    if !matched {
        tracing::debug!(element_id = %id, "No element matched update");
    }
    updated
}

/// Dispatch a toolbar action tag to its add operation.
///
/// Unknown tags leave the list untouched and return no element.
#[must_use]
pub fn handle_add_element(
    action: &str,
    elements: Vec<ElementRef>,
    canvas_size: CanvasSize,
) -> AddOutcome {
    match action.parse::<ElementAction>() {
        Ok(action) => action.apply(elements, canvas_size),
        Err(err) => {
            tracing::debug!("{err}");
            AddOutcome {
                element: None,
                elements,
            }
        }
    }
}
