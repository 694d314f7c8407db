//! Geometric primitives: Point, Size, Velocity

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Velocity in logical pixels per millisecond.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub const fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    pub const ZERO: Velocity = Velocity { vx: 0.0, vy: 0.0 };

    /// Magnitude of the velocity vector.
    pub fn speed(&self) -> f32 {
        self.vx.hypot(self.vy)
    }

    pub fn is_finite(&self) -> bool {
        self.vx.is_finite() && self.vy.is_finite()
    }

    /// Scales both components by `factor`.
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.vx * factor, self.vy * factor)
    }
}

/// Inclusive range of allowed top-left positions for a box.
///
/// A degenerate range (`max < min`) never exists: constructors collapse the
/// maximum onto the minimum instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.min(self.max_x).max(self.min_x),
            point.y.min(self.max_y).max(self.min_y),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_euclidean_magnitude() {
        assert_eq!(Velocity::new(3.0, 4.0).speed(), 5.0);
        assert_eq!(Velocity::ZERO.speed(), 0.0);
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a - b, Point::new(6.0, 15.0));
        assert_eq!(a + b, Point::new(14.0, 25.0));
        assert_eq!(Point::ZERO.distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn bounds_collapse_instead_of_inverting() {
        let bounds = Bounds::new(8.0, 8.0, -20.0, 4.0);
        assert_eq!(bounds.max_x, 8.0);
        assert_eq!(bounds.max_y, 8.0);
        assert_eq!(bounds.clamp(Point::new(100.0, -5.0)), Point::new(8.0, 8.0));
    }

    #[test]
    fn bounds_clamp_and_contain() {
        let bounds = Bounds::new(8.0, 8.0, 100.0, 50.0);
        assert_eq!(bounds.clamp(Point::new(0.0, 60.0)), Point::new(8.0, 50.0));
        assert!(bounds.contains(Point::new(8.0, 50.0)));
        assert!(!bounds.contains(Point::new(7.9, 20.0)));
    }

    #[test]
    fn non_finite_velocity_detected() {
        assert!(!Velocity::new(f32::NAN, 0.0).is_finite());
        assert!(!Velocity::new(0.0, f32::INFINITY).is_finite());
        assert!(Velocity::new(1.0, -1.0).is_finite());
    }
}
