// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tappable regions.

use kurbo::{Circle, Point, Rect, Shape};

/// The geometry of a tappable region, in the same coordinates as the marks it covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitShape {
    /// An axis-aligned rectangle (bars, popups).
    Rect(Rect),
    /// A circle (line markers).
    Circle(Circle),
}

impl HitShape {
    /// Returns `true` if `pt` lies inside the region (edges included).
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Rect(r) => {
                let r = r.abs();
                pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
            }
            Self::Circle(c) => (pt - c.center).hypot2() <= c.radius * c.radius,
        }
    }

    /// Returns the bounding box of the region.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => r.abs(),
            Self::Circle(c) => c.bounding_box(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_its_edges() {
        let hit = HitShape::Rect(Rect::new(0.0, 0.0, 10.0, 20.0));
        assert!(hit.contains(Point::new(0.0, 0.0)));
        assert!(hit.contains(Point::new(10.0, 20.0)));
        assert!(!hit.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn circle_uses_euclidean_distance() {
        let hit = HitShape::Circle(Circle::new((5.0, 5.0), 2.0));
        assert!(hit.contains(Point::new(6.0, 6.0)));
        assert!(!hit.contains(Point::new(6.5, 6.5)));
    }
}
