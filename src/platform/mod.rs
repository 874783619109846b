//! Platform abstraction layer
//!
//! The slide talks to its host through three collaborators:
//! - `FrameSource`: one callback per display refresh, on request
//! - `RenderSink`: apply a 2D translation to the content element
//! - `Layout`: container and content extents along an axis
//!
//! `headless` backs tests and the native demo; `web` backs the browser.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::input::Axis;

/// Requests a single frame callback from the host
pub trait FrameSource {
    /// Ask for one callback on the next display refresh
    fn request_frame(&mut self);
}

/// Receives the content offset after each update
pub trait RenderSink {
    fn translate(&mut self, x: f32, y: f32);
}

/// Lengths along one axis (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extents {
    /// Visible viewport length
    pub container: f32,
    /// Full content length, including padding
    pub content: f32,
}

impl Extents {
    pub fn new(container: f32, content: f32) -> Self {
        Self { container, content }
    }

    /// Maximum scroll travel; zero when the content fits
    pub fn travel(&self) -> f32 {
        (self.content - self.container).max(0.0)
    }
}

/// Supplies extents used to compute scroll bounds
pub trait Layout {
    fn extents(&self, axis: Axis) -> Extents;
}
