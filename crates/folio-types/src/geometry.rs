//! Screen-space geometry primitives.

use std::ops::{Add, Sub};

use serde::Deserialize;

/// A point in screen pixels. May be negative (windows can be dragged
/// partially off-screen).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grow (or shrink) by a signed delta, never going below `min`.
    pub fn resized_by(self, delta: Point, min: Size) -> Size {
        Size::new(
            clamp_axis(i64::from(self.width) + i64::from(delta.x), min.width),
            clamp_axis(i64::from(self.height) + i64::from(delta.y), min.height),
        )
    }

    /// Clamp both axes to at least `min`.
    pub fn at_least(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

fn clamp_axis(value: i64, min: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(u32::MAX)) as u32
}

/// An on-screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Whether `p` lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(&self, p: Point) -> bool {
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        let (left, top) = (i64::from(self.origin.x), i64::from(self.origin.y));
        x >= left
            && y >= top
            && x < left + i64::from(self.size.width)
            && y < top + i64::from(self.size.height)
    }
}
