//! Input validation for untrusted data.
//!
//! Everything the editor posts is validated here before it reaches the
//! element operations.

use poster_core::{
    check_single_background, CanvasSize, ElementId, ElementKind, ElementPatch, ElementRef, Size,
};
use thiserror::Error;

/// Maximum canvas width or height in pixels.
pub const MAX_CANVAS_DIMENSION: f32 = 10_000.0;
/// Maximum length for element IDs (UUIDs are 36 chars).
pub const MAX_ELEMENT_ID_LEN: usize = 64;
/// Maximum text content length in elements.
pub const MAX_TEXT_CONTENT_LEN: usize = 1_048_576; // 1MB
/// Maximum elements per request.
pub const MAX_ELEMENTS_PER_REQUEST: usize = 10_000;

/// Validation error types.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Canvas dimensions out of range.
    #[error("canvas size must be finite and within (0, {MAX_CANVAS_DIMENSION}]: got {width}x{height}")]
    InvalidCanvasSize {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// Element ID exceeds maximum length.
    #[error("element id too long (max {MAX_ELEMENT_ID_LEN} chars)")]
    ElementIdTooLong,
    /// Element ID is not a valid identifier.
    #[error("invalid element id: {0}")]
    InvalidElementId(String),
    /// Too many elements in the request.
    #[error("too many elements (max {MAX_ELEMENTS_PER_REQUEST})")]
    TooManyElements,
    /// More than one background in the list.
    #[error("element list has more than one background")]
    DuplicateBackground,
    /// Text content exceeds maximum length.
    #[error("text content too long (max {MAX_TEXT_CONTENT_LEN} bytes)")]
    TextContentTooLong,
    /// Position or size contains a non-finite value.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl ValidationError {
    /// Short field name used as a metrics label.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidCanvasSize { .. } => "canvas_size",
            Self::ElementIdTooLong | Self::InvalidElementId(_) => "id",
            Self::TooManyElements | Self::DuplicateBackground => "elements",
            Self::TextContentTooLong => "content",
            Self::InvalidGeometry(_) => "geometry",
        }
    }
}

/// Validate a canvas size.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCanvasSize`] if either dimension is not
/// finite, not positive, or larger than [`MAX_CANVAS_DIMENSION`].
pub fn validate_canvas_size(size: CanvasSize) -> Result<(), ValidationError> {
    let in_range = |v: f32| v.is_finite() && v > 0.0 && v <= MAX_CANVAS_DIMENSION;
    if in_range(size.width) && in_range(size.height) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCanvasSize {
            width: size.width,
            height: size.height,
        })
    }
}

/// Validate and parse an element ID.
///
/// # Errors
///
/// Returns [`ValidationError::ElementIdTooLong`] if the ID exceeds 64 characters.
/// Returns [`ValidationError::InvalidElementId`] if it is not a valid ID.
pub fn validate_element_id(id: &str) -> Result<ElementId, ValidationError> {
    if id.len() > MAX_ELEMENT_ID_LEN {
        return Err(ValidationError::ElementIdTooLong);
    }
    ElementId::parse(id).map_err(|e| ValidationError::InvalidElementId(e.to_string()))
}

fn validate_geometry(what: &str, x: f32, y: f32) -> Result<(), ValidationError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidGeometry(format!("{what} ({x}, {y})")))
    }
}

fn validate_size(size: Size) -> Result<(), ValidationError> {
    validate_geometry("size", size.width, size.height)
}

fn validate_text(content: &str) -> Result<(), ValidationError> {
    if content.len() > MAX_TEXT_CONTENT_LEN {
        return Err(ValidationError::TextContentTooLong);
    }
    Ok(())
}

/// Validate an element list posted by the editor.
///
/// # Errors
///
/// Returns an error if the list is too long, has more than one background,
/// or contains oversized text or non-finite geometry.
pub fn validate_elements(elements: &[ElementRef]) -> Result<(), ValidationError> {
    if elements.len() > MAX_ELEMENTS_PER_REQUEST {
        return Err(ValidationError::TooManyElements);
    }
    check_single_background(elements).map_err(|_| ValidationError::DuplicateBackground)?;
    for element in elements {
        validate_geometry("position", element.position.x, element.position.y)?;
        validate_size(element.size)?;
        if let ElementKind::Text { content, .. } = &element.kind {
            validate_text(content)?;
        }
    }
    Ok(())
}

/// Validate a property-panel patch.
///
/// # Errors
///
/// Returns an error if the patch carries oversized text or non-finite
/// geometry.
pub fn validate_patch(patch: &ElementPatch) -> Result<(), ValidationError> {
    if let Some(position) = patch.position {
        validate_geometry("position", position.x, position.y)?;
    }
    if let Some(size) = patch.size {
        validate_size(size)?;
    }
    if let Some(content) = &patch.content {
        validate_text(content)?;
    }
    if let Some(font_size) = patch.font_size {
        if !font_size.is_finite() {
            return Err(ValidationError::InvalidGeometry(format!(
                "fontSize {font_size}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use poster_core::{add_background, add_text, Position};

    #[test]
    fn test_canvas_size_bounds() {
        assert!(validate_canvas_size(Size::new(450.0, 800.0)).is_ok());
        assert!(validate_canvas_size(Size::new(MAX_CANVAS_DIMENSION, 1.0)).is_ok());
        assert!(validate_canvas_size(Size::new(0.0, 800.0)).is_err());
        assert!(validate_canvas_size(Size::new(450.0, 10_001.0)).is_err());
        assert!(validate_canvas_size(Size::new(f32::NAN, 800.0)).is_err());
    }

    #[test]
    fn test_element_id() {
        let id = ElementId::new();
        assert_eq!(validate_element_id(&id.to_string()).expect("valid"), id);
        assert!(matches!(
            validate_element_id("not-a-uuid"),
            Err(ValidationError::InvalidElementId(_))
        ));
        assert!(matches!(
            validate_element_id(&"a".repeat(65)),
            Err(ValidationError::ElementIdTooLong)
        ));
    }

    #[test]
    fn test_duplicate_background_rejected() {
        let first = add_background(Vec::new(), Size::new(450.0, 800.0));
        let second = add_background(Vec::new(), Size::new(450.0, 800.0));
        let mut elements = first.elements;
        elements.extend(second.elements);

        let err = validate_elements(&elements).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateBackground));
        assert_eq!(err.field(), "elements");
    }

    #[test]
    fn test_valid_elements_pass() {
        let outcome = add_background(Vec::new(), Size::new(450.0, 800.0));
        let outcome = add_text(outcome.elements);
        assert!(validate_elements(&outcome.elements).is_ok());
    }

    #[test]
    fn test_patch_validation() {
        let ok = ElementPatch {
            position: Some(Position::new(5.0, 5.0)),
            content: Some("hello".to_string()),
            ..ElementPatch::default()
        };
        assert!(validate_patch(&ok).is_ok());

        let too_long = ElementPatch {
            content: Some("x".repeat(MAX_TEXT_CONTENT_LEN + 1)),
            ..ElementPatch::default()
        };
        assert!(matches!(
            validate_patch(&too_long),
            Err(ValidationError::TextContentTooLong)
        ));

        let bad_size = ElementPatch {
            size: Some(Size::new(f32::INFINITY, 1.0)),
            ..ElementPatch::default()
        };
        assert_eq!(validate_patch(&bad_size).unwrap_err().field(), "geometry");
    }
}
