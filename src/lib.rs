//! Chat message bubble components for GPUI.
//!
//! [`ChatLine`] renders a single user or assistant message as a card:
//! speaker label, body with preserved line breaks and auto-linked URLs,
//! and an optional collapsible list of source excerpts rendered as
//! markdown. [`ChatLineView`] is the stateful wrapper with interactive
//! source toggling. The text transforms live in [`text`] as pure
//! functions; the light/dark style presets live in [`theme`].

mod components;
pub mod text;
pub mod theme;

pub use components::{ChatLine, ChatLineData, ChatLineView, LinkDecorator, MessageRole};
pub use components::{SourceItem, source_label};
