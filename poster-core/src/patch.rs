//! Partial element updates from the property panel.

use serde::{Deserialize, Serialize};

use crate::{Element, ElementKind, ElementType, ObjectFit, Position, Size};

/// A set of field changes to shallow-merge into an element.
///
/// Fields left as `None` keep the element's current value. The `id` and
/// `type` of an element cannot be patched. Fields that do not exist on the
/// target element's type are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    /// New position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// New size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// New image source (background, image, avatar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// New fill color (background, image, avatar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// New fit mode (background, image, avatar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ObjectFit>,
    /// New text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// New font weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// New QR code value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

fn assign<T: Clone>(slot: &mut T, update: Option<&T>) {
    if let Some(v) = update {
        slot.clone_from(v);
    }
}

impl ElementPatch {
    /// Names of the set fields that do not exist on the given element type.
    #[must_use]
    pub fn ignored_fields(&self, element_type: ElementType) -> Vec<&'static str> {
        let image_like = matches!(
            element_type,
            ElementType::Background | ElementType::Image | ElementType::Avatar
        );
        let text = element_type == ElementType::Text;
        let qrcode = element_type == ElementType::QrCode;

        [
            ("src", self.src.is_some(), image_like),
            ("backgroundColor", self.background_color.is_some(), image_like),
            ("objectFit", self.object_fit.is_some(), image_like),
            ("content", self.content.is_some(), text),
            ("color", self.color.is_some(), text),
            ("fontSize", self.font_size.is_some(), text),
            ("fontWeight", self.font_weight.is_some(), text),
            ("value", self.value.is_some(), qrcode),
        ]
        .into_iter()
        .filter(|&(_, set, applies)| set && !applies)
        .map(|(name, _, _)| name)
        .collect()
    }

    /// Return a copy of `element` with this patch merged in.
    #[must_use]
    pub fn apply_to(&self, element: &Element) -> Element {
        let mut merged = element.clone();
        assign(&mut merged.position, self.position.as_ref());
        assign(&mut merged.size, self.size.as_ref());

        match &mut merged.kind {
            ElementKind::Background {
                src,
                background_color,
                object_fit,
            } => {
                assign(src, self.src.as_ref());
                assign(background_color, self.background_color.as_ref());
                assign(object_fit, self.object_fit.as_ref());
            }
            ElementKind::Image {
                src,
                object_fit,
                background_color,
            }
            | ElementKind::Avatar {
                src,
                object_fit,
                background_color,
                ..
            } => {
                assign(src, self.src.as_ref());
                assign(object_fit, self.object_fit.as_ref());
                if let Some(color) = &self.background_color {
                    *background_color = Some(color.clone());
                }
            }
            ElementKind::Text {
                content,
                color,
                font_size,
                font_weight,
            } => {
                assign(content, self.content.as_ref());
                assign(color, self.color.as_ref());
                assign(font_size, self.font_size.as_ref());
                assign(font_weight, self.font_weight.as_ref());
            }
            ElementKind::QrCode { value } => {
                assign(value, self.value.as_ref());
            }
        }

        let ignored = self.ignored_fields(element.element_type());
        if !ignored.is_empty() {
            tracing::debug!(
                element_id = %element.id,
                element_type = %element.element_type(),
                ?ignored,
                "Patch fields do not apply to element type"
            );
        }

        merged
    }
}
