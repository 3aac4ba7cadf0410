//! A poster composition: a canvas size plus its ordered element list.

use serde::{Deserialize, Serialize};

use crate::actions::{self, AddOutcome, ElementAction};
use crate::{CanvasSize, ElementId, ElementPatch, ElementRef, PosterResult};

/// The editor's working document.
///
/// Thin owner around the pure list operations in [`crate::actions`]. List
/// order is render order: later elements draw on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Poster {
    /// Canvas size used when the background is added.
    pub canvas_size: CanvasSize,
    elements: Vec<ElementRef>,
}

impl Poster {
    /// Create an empty poster.
    #[must_use]
    pub fn new(canvas_size: CanvasSize) -> Self {
        Self {
            canvas_size,
            elements: Vec::new(),
        }
    }

    fn run(&mut self, op: impl FnOnce(Vec<ElementRef>) -> AddOutcome) -> Option<ElementRef> {
        let AddOutcome { element, elements } = op(std::mem::take(&mut self.elements));
        self.elements = elements;
        element
    }

    /// Add an element for a toolbar action tag.
    ///
    /// Returns `None` for an unknown tag.
    pub fn add(&mut self, action: &str) -> Option<ElementRef> {
        let canvas_size = self.canvas_size;
        self.run(|elements| actions::handle_add_element(action, elements, canvas_size))
    }

    /// Add an element for a typed toolbar action.
    pub fn apply(&mut self, action: ElementAction) -> Option<ElementRef> {
        let canvas_size = self.canvas_size;
        self.run(|elements| action.apply(elements, canvas_size))
    }

    /// Merge a patch into the element with the given ID.
    ///
    /// Returns whether an element matched.
    pub fn update(&mut self, id: &ElementId, patch: &ElementPatch) -> bool {
        let matched = self.get(id).is_some();
        self.elements = actions::update_element(&self.elements, id, patch);
        matched
    }

    /// Look up an element by ID.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&ElementRef> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// The background element, if one has been added.
    #[must_use]
    pub fn background(&self) -> Option<&ElementRef> {
        self.elements.iter().find(|e| e.is_background())
    }

    /// Elements in render order.
    #[must_use]
    pub fn elements(&self) -> &[ElementRef] {
        &self.elements
    }

    /// Replace the element list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PosterError::DuplicateBackground`] if the list holds
    /// more than one background. The poster is left unchanged.
    pub fn set_elements(&mut self, elements: Vec<ElementRef>) -> PosterResult<()> {
        actions::check_single_background(&elements)?;
        self.elements = elements;
        Ok(())
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the poster has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize the element list to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn elements_json(&self) -> PosterResult<String> {
        Ok(serde_json::to_string(&self.elements)?)
    }

    /// Replace the element list from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an element list or the list holds
    /// more than one background.
    pub fn set_elements_json(&mut self, json: &str) -> PosterResult<()> {
        self.set_elements(serde_json::from_str(json)?)
    }
}
