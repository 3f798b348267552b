//! Input handling: event types, key actions, and the input processor
//! that turns raw window events into camera-controller calls.

/// Platform-agnostic input events and the held-button set.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into controller calls.
pub mod processor;

pub use event::{ButtonSet, InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
