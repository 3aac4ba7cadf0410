//! Poster elements - the building blocks of a composition.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{PosterError, PosterResult};

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::InvalidElementId`] if the string is not a UUID.
    pub fn parse(s: &str) -> PosterResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| PosterError::InvalidElementId(format!("{s}: {e}")))
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ElementId {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Top-left position on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
///
/// Also used as the canvas size handed in by the hosting view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Canvas dimensions supplied when the background is first added.
pub type CanvasSize = Size;

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a canvas size, rejecting non-finite or non-positive dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::InvalidCanvasSize`] if either dimension is not
    /// a finite positive number.
    pub fn checked_canvas(width: f32, height: f32) -> PosterResult<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(PosterError::InvalidCanvasSize { width, height })
        }
    }
}

/// How image content is fitted into its box (CSS `object-fit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Scale to fit inside the box, preserving aspect ratio.
    Contain,
    /// Scale to cover the box, preserving aspect ratio.
    #[default]
    Cover,
    /// Stretch to the box.
    Fill,
    /// Natural size.
    None,
    /// The smaller of `none` and `contain`.
    ScaleDown,
}

/// The closed set of element type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Full-canvas base layer. At most one per poster.
    Background,
    /// A plain image.
    Image,
    /// An avatar image.
    Avatar,
    /// A text block.
    Text,
    /// A QR code.
    QrCode,
}

impl ElementType {
    /// Every element type, in template-table order.
    pub const ALL: [Self; 5] = [
        Self::Background,
        Self::Image,
        Self::Avatar,
        Self::Text,
        Self::QrCode,
    ];

    /// The wire tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Image => "image",
            Self::Avatar => "avatar",
            Self::Text => "text",
            Self::QrCode => "qrcode",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific element content.
///
/// Serialized with an inline `type` tag and camel-case field names, matching the
/// objects the browser editor binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementKind {
    /// The poster background.
    #[serde(rename = "background")]
    Background {
        /// Image source URI or data URL. Empty for a plain color.
        #[serde(default)]
        src: String,
        /// Fill color as hex.
        #[serde(rename = "backgroundColor")]
        background_color: String,
        /// How `src` is fitted.
        #[serde(rename = "objectFit", default)]
        object_fit: ObjectFit,
    },

    /// A plain image.
    #[serde(rename = "image")]
    Image {
        /// Image source URI or data URL.
        #[serde(default)]
        src: String,
        /// How `src` is fitted.
        #[serde(rename = "objectFit", default)]
        object_fit: ObjectFit,
        /// Optional fill color behind the image.
        #[serde(
            rename = "backgroundColor",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        background_color: Option<String>,
    },

    /// An avatar image.
    #[serde(rename = "avatar")]
    Avatar {
        /// Image source URI or data URL.
        #[serde(default)]
        src: String,
        /// How `src` is fitted.
        #[serde(rename = "objectFit", default)]
        object_fit: ObjectFit,
        /// Optional fill color behind the image.
        #[serde(
            rename = "backgroundColor",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        background_color: Option<String>,
        /// Always true; lets the renderer style avatars without a type check.
        /// Incoming values are ignored.
        #[serde(
            rename = "isAvatar",
            default = "always_true",
            deserialize_with = "deserialize_always_true"
        )]
        is_avatar: bool,
    },

    /// A text block.
    #[serde(rename = "text")]
    Text {
        /// Text content.
        content: String,
        /// Text color as hex.
        color: String,
        /// Font size in pixels.
        #[serde(rename = "fontSize")]
        font_size: f32,
        /// CSS font weight (`normal`, `bold`, `600`, ...).
        #[serde(rename = "fontWeight")]
        font_weight: String,
    },

    /// A QR code.
    #[serde(rename = "qrcode")]
    QrCode {
        /// Encoded value.
        value: String,
    },
}

const fn always_true() -> bool {
    true
}

fn deserialize_always_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    bool::deserialize(deserializer).map(|_| true)
}

impl ElementKind {
    /// The type tag of this content.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Background { .. } => ElementType::Background,
            Self::Image { .. } => ElementType::Image,
            Self::Avatar { .. } => ElementType::Avatar,
            Self::Text { .. } => ElementType::Text,
            Self::QrCode { .. } => ElementType::QrCode,
        }
    }
}

/// A poster element with content, position and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Top-left position.
    pub position: Position,
    /// Box size.
    pub size: Size,
    /// Type tag and type-specific fields.
    #[serde(flatten)]
    pub kind: ElementKind,
}

/// Shared handle to an element.
///
/// Element lists hold these so that operations returning a new list can pass
/// untouched entries through without copying them.
pub type ElementRef = Arc<Element>;

impl Element {
    /// Create a new element with a fresh ID.
    #[must_use]
    pub fn new(kind: ElementKind, position: Position, size: Size) -> Self {
        Self {
            id: ElementId::new(),
            position,
            size,
            kind,
        }
    }

    /// The element's type tag.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Whether this is the poster background.
    #[must_use]
    pub fn is_background(&self) -> bool {
        matches!(self.kind, ElementKind::Background { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_element() -> Element {
        Element::new(
            ElementKind::Text {
                content: "Hello".to_string(),
                color: "#000000".to_string(),
                font_size: 16.0,
                font_weight: "normal".to_string(),
            },
            Position::new(200.0, 20.0),
            Size::new(200.0, 100.0),
        )
    }

    #[test]
    fn test_element_ids_are_unique() {
        let a = ElementId::new();
        let b = ElementId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_element_id_parse_roundtrip() {
        let id = ElementId::new();
        let parsed: ElementId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_element_id_parse_rejects_garbage() {
        let err = ElementId::parse("element_1700000000000_abc123def").unwrap_err();
        assert!(matches!(err, PosterError::InvalidElementId(_)));
    }

    #[test]
    fn test_checked_canvas() {
        assert_eq!(
            Size::checked_canvas(450.0, 800.0).expect("valid"),
            Size::new(450.0, 800.0)
        );
        assert!(Size::checked_canvas(0.0, 800.0).is_err());
        assert!(Size::checked_canvas(450.0, -1.0).is_err());
        assert!(Size::checked_canvas(f32::NAN, 800.0).is_err());
        assert!(Size::checked_canvas(f32::INFINITY, 800.0).is_err());
    }

    #[test]
    fn test_text_element_wire_shape() {
        let element = text_element();
        let json = serde_json::to_value(&element).expect("should serialize");

        assert_eq!(json["type"], "text");
        assert_eq!(json["id"], element.id.to_string());
        assert_eq!(json["fontSize"], 16.0);
        assert_eq!(json["fontWeight"], "normal");
        assert_eq!(json["position"]["x"], 200.0);
        assert_eq!(json["size"]["height"], 100.0);
    }

    #[test]
    fn test_avatar_deserializes_from_editor_json() {
        let id = ElementId::new();
        let json = serde_json::json!({
            "id": id.to_string(),
            "type": "avatar",
            "position": { "x": 20.0, "y": 20.0 },
            "size": { "width": 100.0, "height": 100.0 },
            "src": "",
            "isAvatar": true,
            "objectFit": "cover"
        });

        let element: Element = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(element.id, id);
        assert_eq!(element.element_type(), ElementType::Avatar);
        assert!(matches!(
            element.kind,
            ElementKind::Avatar {
                object_fit: ObjectFit::Cover,
                is_avatar: true,
                background_color: None,
                ..
            }
        ));
    }

    #[test]
    fn test_avatar_flag_cannot_be_cleared() {
        let json = serde_json::json!({
            "id": ElementId::new().to_string(),
            "type": "avatar",
            "position": { "x": 20.0, "y": 20.0 },
            "size": { "width": 100.0, "height": 100.0 },
            "src": "",
            "isAvatar": false
        });

        let element: Element = serde_json::from_value(json).expect("should deserialize");
        assert!(matches!(element.kind, ElementKind::Avatar { is_avatar: true, .. }));
        let back = serde_json::to_value(&element).expect("should serialize");
        assert_eq!(back["isAvatar"], true);
    }

    #[test]
    fn test_avatar_flag_defaults_when_missing() {
        let json = serde_json::json!({
            "id": ElementId::new().to_string(),
            "type": "avatar",
            "position": { "x": 0.0, "y": 0.0 },
            "size": { "width": 10.0, "height": 10.0 }
        });

        let element: Element = serde_json::from_value(json).expect("should deserialize");
        assert!(matches!(element.kind, ElementKind::Avatar { is_avatar: true, .. }));
    }

    #[test]
    fn test_object_fit_kebab_case() {
        let json = serde_json::to_string(&ObjectFit::ScaleDown).expect("should serialize");
        assert_eq!(json, "\"scale-down\"");
    }

    #[test]
    fn test_element_type_tags() {
        for ty in ElementType::ALL {
            let json = serde_json::to_string(&ty).expect("should serialize");
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn test_is_background() {
        let bg = Element::new(
            ElementKind::Background {
                src: String::new(),
                background_color: "#ffffff".to_string(),
                object_fit: ObjectFit::Contain,
            },
            Position::default(),
            Size::new(450.0, 800.0),
        );
        assert!(bg.is_background());
        assert!(!text_element().is_background());
    }
}
