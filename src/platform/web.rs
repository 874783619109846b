//! Browser collaborators backed by web-sys

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::{Extents, FrameSource, Layout, RenderSink};
use crate::input::Axis;

/// Shared slot for the per-frame closure. It is filled once the owning
/// slide exists, since the closure has to capture that slide.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `window.requestAnimationFrame` frame source
pub struct AnimationFrames {
    callback: FrameCallback,
}

impl AnimationFrames {
    pub fn new() -> (Self, FrameCallback) {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        (
            Self {
                callback: callback.clone(),
            },
            callback,
        )
    }
}

impl FrameSource for AnimationFrames {
    fn request_frame(&mut self) {
        let Some(window) = web_sys::window() else {
            log::error!("requestAnimationFrame: no window");
            return;
        };
        let slot = self.callback.borrow();
        let Some(closure) = slot.as_ref() else {
            log::warn!("frame requested before the frame callback was installed");
            return;
        };
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Writes the offset to the content element's CSS transform
pub struct StyleTransform {
    content: HtmlElement,
}

impl StyleTransform {
    pub fn new(content: HtmlElement) -> Self {
        Self { content }
    }
}

impl RenderSink for StyleTransform {
    fn translate(&mut self, x: f32, y: f32) {
        let transform = format!("translate3d({x}px, {y}px, 0)");
        if let Err(e) = self.content.style().set_property("transform", &transform) {
            log::warn!("failed to set transform: {:?}", e);
        }
    }
}

/// Measures the viewport and content elements
pub struct ElementLayout {
    viewport: Element,
    content: Element,
}

impl ElementLayout {
    pub fn new(viewport: Element, content: Element) -> Self {
        Self { viewport, content }
    }

    /// Sum of the children's widths plus horizontal padding. The content
    /// element itself may be sized to the viewport while its row of
    /// children overflows it.
    fn content_width(&self) -> f32 {
        let children = self.content.children();
        let children_width: f64 = (0..children.length())
            .filter_map(|i| children.item(i))
            .map(|child| child.get_bounding_client_rect().width())
            .sum();
        (children_width + self.horizontal_padding()) as f32
    }

    fn horizontal_padding(&self) -> f64 {
        let Some(style) = web_sys::window()
            .and_then(|w| w.get_computed_style(&self.content).ok())
            .flatten()
        else {
            return 0.0;
        };
        ["padding-left", "padding-right"]
            .iter()
            .filter_map(|prop| style.get_property_value(prop).ok())
            .map(|value| parse_px(&value))
            .sum()
    }
}

impl Layout for ElementLayout {
    fn extents(&self, axis: Axis) -> Extents {
        let viewport = self.viewport.get_bounding_client_rect();
        match axis {
            Axis::Vertical => Extents::new(
                viewport.height() as f32,
                self.content.get_bounding_client_rect().height() as f32,
            ),
            Axis::Horizontal => Extents::new(viewport.width() as f32, self.content_width()),
        }
    }
}

/// Parse a computed CSS length such as `"12.5px"`
fn parse_px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").parse().unwrap_or(0.0)
}
