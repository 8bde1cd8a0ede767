//! Rectangles.

use cgmath::{Point2, Vector2, Zero};

/// A rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Creates a new rectangle from its origin coordinates and its extent.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::zero(),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// Returns true if the point is inside the rectangle.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// Returns a new rectangle with the given origin.
    pub fn with_origin(&self, origin: Point2<f64>) -> Rect {
        Rect {
            origin,
            size: self.size,
        }
    }

    /// Returns the same rectangle moved to the origin, i.e. the bounds of a view with this frame.
    pub fn bounds(&self) -> Rect {
        self.with_origin(Point2::new(0., 0.))
    }
}

impl Default for Rect {
    fn default() -> Rect {
        Rect::zero()
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from((x, y, width, height): (f64, f64, f64, f64)) -> Rect {
        Rect::from_xywh(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_keep_size_and_drop_origin() {
        let frame = Rect::from_xywh(50., 100., 50., 30.);
        assert_eq!(frame.bounds(), Rect::from_xywh(0., 0., 50., 30.));
        assert_eq!(frame.max_x(), 100.);
        assert_eq!(frame.max_y(), 130.);
    }

    #[test]
    fn contains_is_half_open() {
        let rect: Rect = (0., 0., 10., 10.).into();
        assert!(rect.contains(Point2::new(0., 0.)));
        assert!(rect.contains(Point2::new(9.5, 9.5)));
        assert!(!rect.contains(Point2::new(10., 5.)));
    }
}
