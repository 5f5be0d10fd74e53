//! Input model: the gesture events screens consume, and the state machine
//! that derives them from raw pointer events.
//!
//! Screens only ever see [`InputEvent`]s. [`GestureTracker`] turns a
//! pointer-down / move / up stream into exactly one gesture at a time: a press
//! that stays within [`TAP_SLOP_PX`] becomes a tap, anything further becomes
//! a drag.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::TAP_SLOP_PX;
use crate::geom::Point;

/// A gesture event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Tap { at: Point },
    DragStart { at: Point },
    /// Absolute pointer position, not a delta.
    DragUpdate { at: Point },
    DragEnd,
}

/// Gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No pointer is down.
    #[default]
    Idle,
    /// Pointer is down but has not moved far enough to be a drag.
    Pressed {
        origin: Point,
    },
    Dragging {
        origin: Point,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    state: InputState,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    /// A second pointer-down while a gesture is active is ignored.
    pub fn pointer_down(&mut self, at: Point) -> Vec<InputEvent> {
        if self.state == InputState::Idle {
            self.state = InputState::Pressed { origin: at };
        }
        Vec::new()
    }

    pub fn pointer_move(&mut self, at: Point) -> Vec<InputEvent> {
        match self.state {
            InputState::Idle => Vec::new(),
            InputState::Pressed { origin } => {
                if at.distance(origin) <= TAP_SLOP_PX {
                    return Vec::new();
                }
                self.state = InputState::Dragging { origin };
                vec![InputEvent::DragStart { at: origin }, InputEvent::DragUpdate { at }]
            }
            InputState::Dragging { .. } => vec![InputEvent::DragUpdate { at }],
        }
    }

    pub fn pointer_up(&mut self, at: Point) -> Vec<InputEvent> {
        let events = match self.state {
            InputState::Idle => Vec::new(),
            InputState::Pressed { .. } => vec![InputEvent::Tap { at }],
            InputState::Dragging { .. } => vec![InputEvent::DragEnd],
        };
        self.state = InputState::Idle;
        events
    }

    /// Abandon the current gesture (pointer lost). A drag in progress is ended.
    pub fn cancel(&mut self) -> Vec<InputEvent> {
        let events = match self.state {
            InputState::Dragging { .. } => vec![InputEvent::DragEnd],
            InputState::Idle | InputState::Pressed { .. } => Vec::new(),
        };
        self.state = InputState::Idle;
        events
    }
}
