use glam::{Quat, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::trackball::{Trackball, TrackballSession};

/// Pixel size of the surface receiving pointer events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a pixel position (origin top-left, y down) to normalized device
    /// coordinates in [-1, 1] with +y up.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec2::ZERO;
        }
        let ndc_x = x / self.width * 2.0 - 1.0;
        let ndc_y = 1.0 - y / self.height * 2.0;
        Vec2::new(ndc_x, ndc_y).clamp(Vec2::NEG_ONE, Vec2::ONE)
    }
}

/// Turns a stream of pointer positions into trackball rotations.
#[derive(Debug, Clone)]
pub struct DragTracker {
    trackball: Trackball,
    viewport: Viewport,
    session: TrackballSession,
    /// Last pointer position in NDC while a drag is active
    anchor: Option<Vec2>,
}

impl DragTracker {
    pub fn new(trackball: Trackball, viewport: Viewport) -> Self {
        Self {
            trackball,
            viewport,
            session: TrackballSession::new(),
            anchor: None,
        }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        let ndc = self.viewport.to_ndc(x, y);
        debug!("drag begin at {:?}", ndc);
        self.anchor = Some(ndc);
    }

    /// Advance the drag to a new pixel position.
    ///
    /// Returns the incremental rotation, or `None` when no drag is active.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Option<Quat> {
        let prev = self.anchor?;
        let cur = self.viewport.to_ndc(x, y);
        let increment = self.trackball.rotation(prev, cur);
        self.session.fold(increment);
        self.anchor = Some(cur);
        Some(increment)
    }

    pub fn end(&mut self) {
        if self.anchor.take().is_some() {
            debug!("drag end, orientation {:?}", self.session.orientation);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn session(&self) -> &TrackballSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TrackballSession {
        &mut self.session
    }
}
