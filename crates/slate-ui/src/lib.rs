//! # Slate UI
//!
//! The notepad window, built on the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] wraps a [`slate_core::Editor`] plus the iced editor content
//! - **Message**: everything a click, key press or dialog can produce
//! - **Update**: (state, message) -> new state and a follow-up `Task`
//! - **View**: state -> widgets, including the custom gutter and line highlight
//!
//! ## Learning: The Elm Architecture
//!
//! State only changes in `update`, so every behaviour can be driven from a
//! test by feeding messages to an `App` and inspecting it afterwards.

pub mod app;
pub mod caret;
pub mod theme;
pub mod widget;

pub use app::{run, App, Flags};
