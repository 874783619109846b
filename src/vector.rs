//! Mutable 2D quantity used for position, velocity and acceleration

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D vector that is updated in place each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec2);

impl Vector {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.0.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.0.y = y;
    }

    /// Set both components to `value`
    #[inline]
    pub fn set(&mut self, value: f32) {
        self.0 = Vec2::splat(value);
    }

    /// Component-wise add
    #[inline]
    pub fn add_to(&mut self, other: &Vector) {
        self.0 += other.0;
    }

    /// Component-wise multiply
    #[inline]
    pub fn scale_by(&mut self, amount: f32) {
        self.0 *= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_both_axes() {
        let mut v = Vector::new(3.0, -4.0);
        v.set(0.0);
        assert_eq!(v, Vector::ZERO);
    }

    #[test]
    fn test_add_to_mutates_self_only() {
        let mut a = Vector::new(1.0, 2.0);
        let b = Vector::new(0.5, -1.0);
        a.add_to(&b);
        assert_eq!(a, Vector::new(1.5, 1.0));
        assert_eq!(b, Vector::new(0.5, -1.0));
    }

    #[test]
    fn test_scale_by() {
        let mut v = Vector::new(10.0, -20.0);
        v.scale_by(0.5);
        assert!((v.x() - 5.0).abs() < 1e-6);
        assert!((v.y() + 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_single_axis() {
        let mut v = Vector::ZERO;
        v.set_y(-7.0);
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), -7.0);
        v.set_x(2.0);
        assert_eq!(v, Vector::new(2.0, -7.0));
    }
}
