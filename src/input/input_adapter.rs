use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::drag::{DragTracker, Viewport};
use crate::trackball::{Trackball, TrackballSession};

/// Adapter that bridges Winit events to a DragTracker
#[derive(Debug, Clone)]
pub struct WinitDragAdapter {
    tracker: DragTracker,
    /// Button that rotates the trackball while held
    button: MouseButton,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
}

impl WinitDragAdapter {
    pub fn new(trackball: Trackball, size: PhysicalSize<u32>) -> Self {
        Self {
            tracker: DragTracker::new(trackball, Self::viewport(size)),
            button: MouseButton::Left,
            mouse_position: None,
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Process a Winit WindowEvent and update the trackball session.
    ///
    /// Returns true when the orientation may have changed.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } if *button == self.button => {
                match state {
                    ElementState::Pressed => {
                        if let Some((x, y)) = self.mouse_position {
                            self.tracker.begin(x, y);
                        }
                    }
                    ElementState::Released => self.tracker.end(),
                }
                false
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::CursorLeft { .. } => {
                self.tracker.end();
                self.mouse_position = None;
                false
            }
            WindowEvent::Resized(size) => {
                self.tracker.resize(Self::viewport(*size));
                false
            }
            _ => false,
        }
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> bool {
        let (x, y) = (position.x as f32, position.y as f32);
        self.mouse_position = Some((x, y));
        self.tracker.drag_to(x, y).is_some()
    }

    fn viewport(size: PhysicalSize<u32>) -> Viewport {
        Viewport::new(size.width as f32, size.height as f32)
    }

    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn session(&self) -> &TrackballSession {
        self.tracker.session()
    }
}
