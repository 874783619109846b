//! Active axis and directional keys

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// The axis a slide moves along; the other axis is inert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }

    /// Read this axis from a vector
    #[inline]
    pub fn get(self, v: &Vector) -> f32 {
        match self {
            Axis::Horizontal => v.x(),
            Axis::Vertical => v.y(),
        }
    }

    /// Write this axis of a vector, leaving the other untouched
    #[inline]
    pub fn set(self, v: &mut Vector, value: f32) {
        match self {
            Axis::Horizontal => v.set_x(value),
            Axis::Vertical => v.set_y(value),
        }
    }

    #[inline]
    pub fn add(self, v: &mut Vector, amount: f32) {
        self.set(v, self.get(v) + amount);
    }

    /// Pick this axis out of a screen point
    #[inline]
    pub fn of_point(self, p: Vec2) -> f32 {
        match self {
            Axis::Horizontal => p.x,
            Axis::Vertical => p.y,
        }
    }
}

/// Directional keys a slide can respond to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Parse a `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            _ => None,
        }
    }

    /// Parse a `KeyboardEvent`, preferring `key` and falling back to the
    /// legacy `keyCode` for browsers that report `"Unidentified"`
    pub fn from_event(name: &str, code: u32) -> Option<Self> {
        Self::from_key_name(name).or_else(|| Self::from_key_code(code))
    }

    /// Parse a legacy `KeyboardEvent.keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            40 => Some(Key::Down),
            _ => None,
        }
    }

    /// Sign of the acceleration this key produces on `axis`, or None when
    /// the key belongs to the other axis.
    ///
    /// Positive acceleration moves content toward its start (up/left), so
    /// Up and Left are the "increase" keys.
    pub fn direction_on(self, axis: Axis) -> Option<f32> {
        match (axis, self) {
            (Axis::Vertical, Key::Up) => Some(1.0),
            (Axis::Vertical, Key::Down) => Some(-1.0),
            (Axis::Horizontal, Key::Left) => Some(1.0),
            (Axis::Horizontal, Key::Right) => Some(-1.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_get_set_add() {
        let mut v = Vector::new(1.0, 2.0);
        Axis::Vertical.add(&mut v, 3.0);
        assert_eq!(v, Vector::new(1.0, 5.0));
        Axis::Horizontal.set(&mut v, -4.0);
        assert_eq!(Axis::Horizontal.get(&v), -4.0);
        assert_eq!(Axis::Vertical.get(&v), 5.0);
    }

    #[test]
    fn test_key_codes_match_key_names() {
        for (code, name) in [(37, "ArrowLeft"), (38, "ArrowUp"), (39, "ArrowRight"), (40, "ArrowDown")] {
            assert_eq!(Key::from_key_code(code), Key::from_key_name(name));
        }
        assert_eq!(Key::from_key_code(13), None);
        assert_eq!(Key::from_key_name("Enter"), None);
    }

    #[test]
    fn test_from_event_falls_back_to_key_code() {
        assert_eq!(Key::from_event("ArrowUp", 0), Some(Key::Up));
        assert_eq!(Key::from_event("Unidentified", 39), Some(Key::Right));
        assert_eq!(Key::from_event("Unidentified", 13), None);
    }

    #[test]
    fn test_off_axis_keys_have_no_direction() {
        assert_eq!(Key::Left.direction_on(Axis::Vertical), None);
        assert_eq!(Key::Down.direction_on(Axis::Horizontal), None);
        assert_eq!(Key::Up.direction_on(Axis::Vertical), Some(1.0));
        assert_eq!(Key::Right.direction_on(Axis::Horizontal), Some(-1.0));
    }
}
