//! Input model: the drag gesture state machine.
//!
//! The host normalizes mouse and touch input into a single primary-pointer
//! event stream, so the engine sees only pointer down/move/up/cancel events
//! carrying surface-relative physical coordinates. One token may be dragged
//! at a time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::board::TokenId;
use crate::viewport::Point;

/// The active pointer gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A token is following the pointer.
    Dragging {
        /// The token being dragged.
        id: TokenId,
        /// Physical offset from the token center to the grab point, captured
        /// at pointer-down so the token doesn't jump under the pointer.
        grab: Point,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}
