//! Momentum Slide - a draggable content panel with inertia and friction
//!
//! Core modules:
//! - `vector`: Mutable 2D quantity (position, velocity, acceleration)
//! - `engine`: Start/stop-able animation frame loop
//! - `slide`: Momentum surface state machine (input, physics, bounds)
//! - `input`: Active axis and directional keys
//! - `options`: Per-surface configuration
//! - `platform`: Host collaborators (frames, rendering, layout)

pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod platform;
pub mod slide;
pub mod vector;

pub use engine::Engine;
pub use error::{SlideError, SlideResult};
pub use input::{Axis, Key};
pub use options::SlideOptions;
pub use slide::{DragSample, Slide, SlideSnapshot};
pub use vector::Vector;

/// Physics tuning constants
pub mod consts {
    /// Acceleration applied per tick while a direction key is held (px/tick²)
    pub const KEY_ACCELERATION: f32 = 0.6;
    /// Velocity magnitude at or below which motion is considered at rest
    pub const STOP_THRESHOLD: f32 = 0.1;
    /// Drag deltas at or below this magnitude don't move the anchor (px)
    pub const DRAG_DEAD_ZONE: f32 = 2.0;

    /// Drag history is trimmed once it grows past this many samples
    pub const DRAG_HISTORY_CAP: usize = 200;
    /// Samples kept (most recent) after a trim
    pub const DRAG_HISTORY_KEEP: usize = 100;

    /// Default per-tick friction factor
    pub const DEFAULT_FRICTION: f32 = 0.96;
}
