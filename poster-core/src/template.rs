//! Default element templates.
//!
//! Every new element is seeded from the template for its type. The table is
//! a pure function of [`ElementType`], so there is no shared mutable state
//! and adding a variant forces a new entry here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Element, ElementId, ElementKind, ElementType, ObjectFit, Position, Size};

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f32 = 450.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 800.0;

/// Placeholder shown in a freshly added text block.
pub const DEFAULT_TEXT_CONTENT: &str = "Click to edit text";

/// Value encoded by a freshly added QR code.
pub const DEFAULT_QRCODE_VALUE: &str = "https://example.com";

/// The default field set for one element type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementTemplate {
    /// Initial position.
    pub position: Position,
    /// Initial size.
    pub size: Size,
    /// Type tag and initial type-specific fields.
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl ElementTemplate {
    /// The template for the given element type.
    #[must_use]
    pub fn for_type(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Background => Self {
                position: Position::new(0.0, 0.0),
                size: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
                kind: ElementKind::Background {
                    src: String::new(),
                    background_color: "#ffffff".to_string(),
                    object_fit: ObjectFit::Contain,
                },
            },
            ElementType::Image => Self {
                position: Position::new(20.0, 200.0),
                size: Size::new(200.0, 200.0),
                kind: ElementKind::Image {
                    src: String::new(),
                    object_fit: ObjectFit::Cover,
                    background_color: None,
                },
            },
            ElementType::Avatar => Self {
                position: Position::new(20.0, 20.0),
                size: Size::new(100.0, 100.0),
                kind: ElementKind::Avatar {
                    src: String::new(),
                    object_fit: ObjectFit::Cover,
                    background_color: None,
                    is_avatar: true,
                },
            },
            ElementType::Text => Self {
                position: Position::new(200.0, 20.0),
                size: Size::new(200.0, 100.0),
                kind: ElementKind::Text {
                    content: DEFAULT_TEXT_CONTENT.to_string(),
                    color: "#000000".to_string(),
                    font_size: 16.0,
                    font_weight: "normal".to_string(),
                },
            },
            ElementType::QrCode => Self {
                position: Position::new(300.0, 600.0),
                size: Size::new(120.0, 120.0),
                kind: ElementKind::QrCode {
                    value: DEFAULT_QRCODE_VALUE.to_string(),
                },
            },
        }
    }

    /// Build a new element from this template with a fresh ID.
    #[must_use]
    pub fn instantiate(&self) -> Element {
        Element {
            id: ElementId::new(),
            position: self.position,
            size: self.size,
            kind: self.kind.clone(),
        }
    }
}

/// The full template table keyed by element type.
#[must_use]
pub fn default_elements() -> BTreeMap<ElementType, ElementTemplate> {
    ElementType::ALL
        .into_iter()
        .map(|ty| (ty, ElementTemplate::for_type(ty)))
        .collect()
}
