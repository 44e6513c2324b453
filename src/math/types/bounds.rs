// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> FieldResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(FieldError::InvalidDomain {
                message: format!(
                    "Invalid bounds: min ({}, {}) > max ({}, {})",
                    min.x, min.y, max.x, max.y
                ),
            });
        }

        Ok(Self { min, max })
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Ränder inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D(({}, {}) to ({}, {}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_bounds() {
        let result = Bounds2D::new(Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0));
        assert!(matches!(result, Err(FieldError::InvalidDomain { .. })));
    }

    #[test]
    fn test_contains_point_edges_inclusive() {
        let bounds = Bounds2D::new(Point2D::new(-1.0, -1.0), Point2D::new(1.0, 1.0)).unwrap();

        assert!(bounds.contains_point(Point2D::new(0.0, 0.0)));
        assert!(bounds.contains_point(Point2D::new(-1.0, 1.0)));
        assert!(bounds.contains_point(Point2D::new(1.0, -1.0)));
        assert!(!bounds.contains_point(Point2D::new(1.0 + 1e-9, 0.0)));
        assert!(!bounds.contains_point(Point2D::new(0.0, -1.0 - 1e-9)));
    }

    #[test]
    fn test_dimensions_and_center() {
        let bounds = Bounds2D::new(Point2D::new(-2.5, -1.0), Point2D::new(2.5, 3.0)).unwrap();

        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 4.0);
        assert_eq!(bounds.center(), Point2D::new(0.0, 1.0));
    }
}
