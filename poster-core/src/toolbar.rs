//! Toolbar button tables consumed by the editor's rendering layer.

use serde::Serialize;

use crate::ElementAction;

/// Visual style of a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Positive/completion action.
    Success,
}

/// A button that adds an element to the poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    /// Action dispatched when pressed.
    #[serde(rename = "type")]
    pub action: ElementAction,
    /// Button label.
    pub label: &'static str,
    /// Single-glyph icon.
    pub icon: &'static str,
}

/// Operations that act on the whole poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterOperation {
    /// Export the composed poster as an image.
    Export,
}

/// A button that runs a whole-poster operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationButton {
    /// Operation run when pressed.
    #[serde(rename = "type")]
    pub operation: PosterOperation,
    /// Button label.
    pub label: &'static str,
    /// Inline SVG icon markup.
    pub icon: &'static str,
    /// Button style.
    #[serde(rename = "btnType")]
    pub style: ButtonStyle,
}

const DOWNLOAD_ICON: &str = r#"<svg class="icon-download" viewBox="0 0 24 24" width="16" height="16" fill="currentColor">
      <path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/>
    </svg>"#;

/// Element buttons, in toolbar order.
pub const ACTION_BUTTONS: [ActionButton; 5] = [
    ActionButton {
        action: ElementAction::Poster,
        label: "Poster Layout",
        icon: "D",
    },
    ActionButton {
        action: ElementAction::Text,
        label: "Text",
        icon: "T",
    },
    ActionButton {
        action: ElementAction::Image,
        label: "Image",
        icon: "P",
    },
    ActionButton {
        action: ElementAction::QrCode,
        label: "QR Code",
        icon: "Q",
    },
    ActionButton {
        action: ElementAction::Avatar,
        label: "Avatar",
        icon: "A",
    },
];

/// Whole-poster operation buttons.
pub const OPERATION_BUTTONS: [OperationButton; 1] = [OperationButton {
    operation: PosterOperation::Export,
    label: "Export Poster",
    icon: DOWNLOAD_ICON,
    style: ButtonStyle::Success,
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_buttons_cover_every_action_once() {
        let actions: Vec<_> = ACTION_BUTTONS.iter().map(|b| b.action).collect();
        assert_eq!(actions, ElementAction::ALL.to_vec());
    }

    #[test]
    fn test_action_button_json() {
        let json = serde_json::to_value(ACTION_BUTTONS).expect("should serialize");
        assert_eq!(json[0]["type"], "poster");
        assert_eq!(json[0]["icon"], "D");
        assert_eq!(json[3]["type"], "qrcode");
        assert_eq!(json[3]["label"], "QR Code");
    }

    #[test]
    fn test_operation_button_json() {
        let json = serde_json::to_value(OPERATION_BUTTONS).expect("should serialize");
        assert_eq!(json[0]["type"], "export");
        assert_eq!(json[0]["btnType"], "success");
        assert!(json[0]["icon"]
            .as_str()
            .is_some_and(|icon| icon.starts_with("<svg")));
    }
}
