//! Pointer input tracking
//!
//! Folds winit window events into the widget's pointer event stream. Only the
//! primary button drives the interaction machine; other buttons and keys are
//! ignored.

use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::interaction::PointerEvent;

/// Tracks the cursor and primary-button state across window events
pub struct PointerTracker {
    /// Current cursor position in physical pixels
    position: (f32, f32),
    /// Whether the primary button is held
    primary_down: bool,
}

impl PointerTracker {
    /// Create a tracker with the cursor at the origin
    pub fn new() -> Self {
        Self {
            position: (0.0, 0.0),
            primary_down: false,
        }
    }

    /// Process a window event; returns the pointer event to feed the widget,
    /// if this window event produced one
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.on_button(*state == ElementState::Pressed),
            _ => None,
        }
    }

    fn on_cursor(&mut self, x: f32, y: f32) -> Option<PointerEvent> {
        self.position = (x, y);
        Some(PointerEvent::Move { x, y })
    }

    fn on_button(&mut self, pressed: bool) -> Option<PointerEvent> {
        let (x, y) = self.position;
        if pressed {
            self.primary_down = true;
            Some(PointerEvent::Down { x, y })
        } else {
            // Releases without a matching press (button held while the
            // cursor entered the window) are dropped
            if !self.primary_down {
                return None;
            }
            self.primary_down = false;
            Some(PointerEvent::Up { x, y })
        }
    }

    /// Current cursor position
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Whether the primary button is held
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
