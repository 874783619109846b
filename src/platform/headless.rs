//! In-memory collaborators for tests and the native demo

use glam::Vec2;

use super::{Extents, FrameSource, Layout, RenderSink};
use crate::input::Axis;

/// Counts frame requests; frames are delivered by calling `Slide::on_frame`
#[derive(Debug, Clone, Default)]
pub struct ManualFrames {
    requested: usize,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total frames requested so far
    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl FrameSource for ManualFrames {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}

/// Remembers the most recent translation
#[derive(Debug, Clone, Default)]
pub struct RecordedTransforms {
    last: Option<Vec2>,
    count: usize,
}

impl RecordedTransforms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.last
    }

    /// Number of renders received
    pub fn count(&self) -> usize {
        self.count
    }
}

impl RenderSink for RecordedTransforms {
    fn translate(&mut self, x: f32, y: f32) {
        self.last = Some(Vec2::new(x, y));
        self.count += 1;
    }
}

/// Layout with extents set directly
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLayout {
    pub horizontal: Extents,
    pub vertical: Extents,
}

impl FixedLayout {
    /// Layout whose given axis scrolls `travel` pixels over a `container` viewport
    pub fn with_travel(axis: Axis, container: f32, travel: f32) -> Self {
        let mut layout = Self::default();
        layout.set(axis, Extents::new(container, container + travel));
        layout
    }

    pub fn set(&mut self, axis: Axis, extents: Extents) {
        match axis {
            Axis::Horizontal => self.horizontal = extents,
            Axis::Vertical => self.vertical = extents,
        }
    }
}

impl Layout for FixedLayout {
    fn extents(&self, axis: Axis) -> Extents {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_clamps_at_zero() {
        assert_eq!(Extents::new(500.0, 300.0).travel(), 0.0);
        assert_eq!(Extents::new(500.0, 800.0).travel(), 300.0);
    }

    #[test]
    fn test_fixed_layout_per_axis() {
        let layout = FixedLayout::with_travel(Axis::Horizontal, 400.0, 250.0);
        assert_eq!(layout.extents(Axis::Horizontal).travel(), 250.0);
        assert_eq!(layout.extents(Axis::Vertical).travel(), 0.0);
    }
}
