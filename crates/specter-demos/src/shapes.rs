//! Rectangles and squares as separate immutable values.
//!
//! Neither type has setters. A square can become a rectangle with the same
//! sides, never the reverse, so code written against [`Shape`] or
//! [`Rectangle`] never sees an area it did not expect.

use std::fmt;

pub trait Shape {
    fn area(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a rectangle with a different width and the same height.
    pub fn with_width(self, width: u32) -> Self {
        Self { width, ..self }
    }

    /// Returns a rectangle with a different height and the same width.
    pub fn with_height(self, height: u32) -> Self {
        Self { height, ..self }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }
}

impl Shape for Square {
    fn area(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Side: {}", self.side)
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle::new(square.side, square.side)
    }
}
