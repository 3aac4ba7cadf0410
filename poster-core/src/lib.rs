//! # Poster Core
//!
//! Element model and element-list operations for the poster editor.
//! Compiles to WASM so the browser editor and the server share one
//! implementation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              poster-core.wasm               │
//! ├─────────────────────────────────────────────┤
//! │  Elements        │  Actions                 │
//! │  - Kinds / IDs   │  - add-* per type        │
//! │  - Patches       │  - update-element        │
//! │                  │  - dispatch by tag       │
//! ├─────────────────────────────────────────────┤
//! │  Templates       │  Toolbar                 │
//! │  - Per-type      │  - Element buttons       │
//! │    defaults      │  - Operation buttons     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod element;
pub mod error;
pub mod patch;
pub mod poster;
pub mod template;
pub mod toolbar;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use actions::{
    add_avatar, add_background, add_image, add_qrcode, add_text, check_single_background,
    handle_add_element, update_element, AddOutcome, ElementAction,
};
pub use element::{
    CanvasSize, Element, ElementId, ElementKind, ElementRef, ElementType, ObjectFit, Position,
    Size,
};
pub use error::{PosterError, PosterResult};
pub use patch::ElementPatch;
pub use poster::Poster;
pub use template::{default_elements, ElementTemplate};
pub use toolbar::{ActionButton, OperationButton, ACTION_BUTTONS, OPERATION_BUTTONS};

/// Poster core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
