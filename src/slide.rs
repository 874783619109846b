//! Momentum surface
//!
//! A `Slide` turns pointer drags and held arrow keys into a content offset
//! that coasts with friction after release and stays inside its bounds.
//! The active axis position always lies in `[-bounds_max, 0]`: zero shows the
//! start of the content, `-bounds_max` shows its end.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::engine::Engine;
use crate::error::SlideResult;
use crate::input::{Axis, Key};
use crate::options::SlideOptions;
use crate::platform::{FrameSource, Layout, RenderSink};
use crate::vector::Vector;

/// One recorded pointer movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Anchor minus current pointer position along the active axis
    pub delta: f32,
    /// Host timestamp (ms)
    pub timestamp: f64,
}

/// Serializable view of a slide's motion state
#[derive(Debug, Clone, Serialize)]
pub struct SlideSnapshot {
    pub position: Vector,
    pub velocity: Vector,
    pub bounds_max: f32,
    pub dragging: bool,
    pub accelerating: bool,
    pub running: bool,
}

/// A content panel moving with inertia along one axis
pub struct Slide<F, R, L> {
    options: SlideOptions,
    axis: Axis,
    friction: f32,

    position: Vector,
    velocity: Vector,
    acceleration: Vector,
    bounds_max: f32,

    dragging: bool,
    accelerating: bool,
    /// Between pointer down and up; move/up events are ignored otherwise
    tracking_pointer: bool,
    hovered: bool,

    drag_history: Vec<DragSample>,
    last_drag_position: f32,
    /// Most recent drag delta
    delta_amount: f32,

    engine: Engine<F>,
    sink: R,
    layout: L,
}

impl<F: FrameSource, R: RenderSink, L: Layout> Slide<F, R, L> {
    pub fn new(options: SlideOptions, frames: F, sink: R, layout: L) -> SlideResult<Self> {
        options.validate()?;
        let axis = options.direction;
        let bounds_max = layout.extents(axis).travel();
        log::debug!("slide created: {} axis, bounds {bounds_max}", axis.as_str());

        Ok(Self {
            friction: options.friction,
            axis,
            options,
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            acceleration: Vector::ZERO,
            bounds_max,
            dragging: false,
            accelerating: false,
            tracking_pointer: false,
            hovered: false,
            drag_history: Vec::with_capacity(DRAG_HISTORY_CAP + 1),
            last_drag_position: 0.0,
            delta_amount: 0.0,
            engine: Engine::new(frames),
            sink,
            layout,
        })
    }

    // === Input ===

    /// Start accelerating along the active axis; keys for the other axis are ignored
    pub fn on_key_down(&mut self, key: Key) {
        let Some(sign) = key.direction_on(self.axis) else {
            return;
        };
        self.accelerating = true;
        self.axis.set(&mut self.acceleration, sign * KEY_ACCELERATION);
        self.engine.start();
    }

    /// Stop accelerating; friction takes over on the next tick
    pub fn on_key_up(&mut self) {
        self.accelerating = false;
    }

    /// Grab the content. Returns true: the host should suppress its default action.
    pub fn on_pointer_down(&mut self, position: Vec2, _timestamp: f64) -> bool {
        self.velocity.set(0.0);
        self.accelerating = false;
        self.engine.stop();
        self.last_drag_position = self.axis.of_point(position);
        self.drag_history.clear();
        self.tracking_pointer = true;
        true
    }

    /// Drag the content. Returns whether the event was consumed.
    pub fn on_pointer_move(&mut self, position: Vec2, timestamp: f64) -> bool {
        if !self.tracking_pointer {
            return false;
        }
        self.dragging = true;

        let current = self.axis.of_point(position);
        self.delta_amount = self.last_drag_position - current;
        self.drag_history.push(DragSample {
            delta: self.delta_amount,
            timestamp,
        });
        if self.drag_history.len() > DRAG_HISTORY_CAP {
            let excess = self.drag_history.len() - DRAG_HISTORY_KEEP;
            self.drag_history.drain(..excess);
        }

        if self.delta_amount.abs() > DRAG_DEAD_ZONE {
            self.last_drag_position = current;
            self.update();
        }
        true
    }

    /// Let go of the content and coast at the average drag velocity
    pub fn on_pointer_up(&mut self) {
        if !self.tracking_pointer {
            return;
        }
        self.release();
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Leaving the surface ends any drag in progress. Key-up isn't routed
    /// here once the pointer is gone, so a held key is released too.
    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        self.accelerating = false;
        if self.dragging {
            self.release();
        }
    }

    /// Recompute bounds and keep the same relative scroll position
    pub fn on_resize(&mut self) {
        let previous_max = self.bounds_max;
        self.bounds_max = self.layout.extents(self.axis).travel();

        if previous_max > 0.0 {
            let ratio = self.bounds_max / previous_max;
            let scaled = self.axis.get(&self.position) * ratio;
            self.axis.set(&mut self.position, scaled);
        } else {
            // Nothing to preserve; the position was pinned at zero
            self.axis.set(&mut self.position, 0.0);
        }
        log::debug!("resize: bounds {previous_max} -> {}", self.bounds_max);
        self.render();
    }

    /// Whether arrow keys should be routed to this slide
    pub fn keyboard_active(&self) -> bool {
        self.options.keyboard && self.hovered
    }

    // === Frame loop ===

    /// Handle a frame granted by the host
    pub fn on_frame(&mut self) {
        if self.engine.begin_frame() {
            self.update();
            self.engine.end_frame();
        }
    }

    /// Advance one tick: velocity, position, bounds, stop check, render
    pub fn update(&mut self) {
        self.calculate_velocity();
        self.position.add_to(&self.velocity);
        self.clamp_to_bounds();

        if self.should_stop() {
            self.engine.stop();
        }

        log::trace!(
            "update: pos {} vel {}",
            self.axis.get(&self.position),
            self.axis.get(&self.velocity)
        );
        self.render();
    }

    fn calculate_velocity(&mut self) {
        if self.dragging {
            self.axis.set(&mut self.velocity, -self.delta_amount);
            return;
        }

        if self.accelerating {
            self.velocity.add_to(&self.acceleration);
        } else {
            self.velocity.scale_by(self.friction);
        }
    }

    fn clamp_to_bounds(&mut self) {
        let pos = self.axis.get(&self.position);
        if pos > 0.0 {
            self.axis.set(&mut self.position, 0.0);
            self.axis.set(&mut self.velocity, 0.0);
        } else if pos < -self.bounds_max {
            self.axis.set(&mut self.position, -self.bounds_max);
            self.axis.set(&mut self.velocity, 0.0);
        }
    }

    fn should_stop(&self) -> bool {
        !self.accelerating && self.axis.get(&self.velocity).abs() <= STOP_THRESHOLD
    }

    fn release(&mut self) {
        self.tracking_pointer = false;
        self.dragging = false;
        let velocity = self.average_release_velocity();
        self.axis.set(&mut self.velocity, velocity);
        self.accelerating = false;
        log::debug!(
            "release: velocity {velocity} from {} samples",
            self.drag_history.len()
        );
        self.engine.start();
        self.drag_history.clear();
    }

    /// Negated mean of the recorded drag deltas
    fn average_release_velocity(&self) -> f32 {
        if self.drag_history.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.drag_history.iter().map(|s| s.delta).sum();
        -(sum / self.drag_history.len() as f32)
    }

    fn render(&mut self) {
        self.sink.translate(self.position.x(), self.position.y());
    }

    // === Accessors ===

    pub fn options(&self) -> &SlideOptions {
        &self.options
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn bounds_max(&self) -> f32 {
        self.bounds_max
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_accelerating(&self) -> bool {
        self.accelerating
    }

    pub fn drag_history(&self) -> &[DragSample] {
        &self.drag_history
    }

    pub fn engine(&self) -> &Engine<F> {
        &self.engine
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn snapshot(&self) -> SlideSnapshot {
        SlideSnapshot {
            position: self.position,
            velocity: self.velocity,
            bounds_max: self.bounds_max,
            dragging: self.dragging,
            accelerating: self.accelerating,
            running: self.engine.is_running(),
        }
    }
}
