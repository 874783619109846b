//! Per-surface configuration
//!
//! Options can be built in code or read from JSON (e.g. a `data-slide`
//! attribute on the viewport element). Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRICTION;
use crate::error::{SlideError, SlideResult};
use crate::input::Axis;

/// Slide options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideOptions {
    /// Axis the content moves along
    pub direction: Axis,
    /// Per-tick velocity multiplier when coasting (0 < friction <= 1)
    pub friction: f32,
    /// Listen for touch events
    pub touch: bool,
    /// Listen for mouse events
    pub mouse: bool,
    /// Arrow keys accelerate the content while hovered
    pub keyboard: bool,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            direction: Axis::Vertical,
            friction: DEFAULT_FRICTION,
            touch: false,
            mouse: true,
            keyboard: false,
        }
    }
}

impl SlideOptions {
    pub fn vertical() -> Self {
        Self::default()
    }

    pub fn horizontal() -> Self {
        Self {
            direction: Axis::Horizontal,
            ..Self::default()
        }
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Parse options from JSON, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> SlideResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Apply JSON overrides on top of these options
    pub fn merge_json(&self, json: &str) -> SlideResult<Self> {
        let mut value = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        if let (Some(base), serde_json::Value::Object(patch)) = (value.as_object_mut(), overrides) {
            base.extend(patch);
        }
        let merged: Self = serde_json::from_value(value)?;
        merged.validate()?;
        Ok(merged)
    }

    pub fn validate(&self) -> SlideResult<()> {
        if self.friction > 0.0 && self.friction <= 1.0 {
            Ok(())
        } else {
            Err(SlideError::InvalidFriction(self.friction))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SlideOptions::default();
        assert_eq!(options.direction, Axis::Vertical);
        assert_eq!(options.friction, 0.96);
        assert!(options.mouse);
        assert!(!options.touch);
        assert!(!options.keyboard);
    }

    #[test]
    fn test_from_json_partial() {
        let options = SlideOptions::from_json(r#"{"direction":"horizontal","friction":0.98}"#)
            .expect("valid options");
        assert_eq!(options.direction, Axis::Horizontal);
        assert_eq!(options.friction, 0.98);
        assert!(options.mouse);
    }

    #[test]
    fn test_invalid_friction_rejected() {
        assert!(matches!(
            SlideOptions::from_json(r#"{"friction":1.5}"#),
            Err(SlideError::InvalidFriction(_))
        ));
        assert!(SlideOptions::default().with_friction(0.0).validate().is_err());
        assert!(SlideOptions::default().with_friction(1.0).validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SlideOptions::from_json("{direction"),
            Err(SlideError::Json(_))
        ));
    }

    #[test]
    fn test_merge_keeps_base_fields() {
        let base = SlideOptions::horizontal().with_friction(0.9).with_keyboard(true);
        let merged = base.merge_json(r#"{"touch":true}"#).expect("valid overrides");
        assert_eq!(merged.direction, Axis::Horizontal);
        assert_eq!(merged.friction, 0.9);
        assert!(merged.keyboard);
        assert!(merged.touch);
    }
}
