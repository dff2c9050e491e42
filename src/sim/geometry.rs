//! Triangle primitives used by drone hit detection
//!
//! Everything here works in normalized playfield units, so the inside test's
//! tolerance is an absolute area in [0,1]² space.

use glam::Vec2;

/// Slack allowed between the sub-triangle area sum and the triangle area
pub const AREA_TOLERANCE: f32 = 0.001;

/// Unsigned triangle area (shoelace formula)
#[inline]
pub fn triangle_area(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)).abs() / 2.0
}

/// Check whether `p` lies inside (or on the edge of) triangle `p1 p2 p3`.
///
/// Uses the area-sum method: the three triangles formed by `p` and each edge
/// add up to the full triangle only when `p` is inside.
pub fn is_inside_triangle(p1: Vec2, p2: Vec2, p3: Vec2, p: Vec2) -> bool {
    let area = triangle_area(p1, p2, p3);
    let a1 = triangle_area(p, p2, p3);
    let a2 = triangle_area(p1, p, p3);
    let a3 = triangle_area(p1, p2, p);
    (area - (a1 + a2 + a3)).abs() < AREA_TOLERANCE
}

/// A triangle in normalized playfield space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        is_inside_triangle(self.a, self.b, self.c, p)
    }

    /// Any of the points inside?
    pub fn contains_any(&self, points: &[Vec2]) -> bool {
        points.iter().any(|&p| self.contains(p))
    }

    pub fn centroid(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn signed_area(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
        (p2 - p1).perp_dot(p3 - p1) / 2.0
    }

    /// Independent barycentric sign test (strict interior)
    fn sign_test_inside(p1: Vec2, p2: Vec2, p3: Vec2, p: Vec2) -> bool {
        let d1 = signed_area(p, p1, p2);
        let d2 = signed_area(p, p2, p3);
        let d3 = signed_area(p, p3, p1);
        (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
    }

    #[test]
    fn test_triangle_area() {
        let area = triangle_area(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert!((area - 0.5).abs() < 1e-6);
        // Winding doesn't matter
        let area = triangle_area(Vec2::ZERO, Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
        assert!((area - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_inside_and_outside() {
        let (a, b, c) = (Vec2::new(0.1, 0.1), Vec2::new(0.6, 0.1), Vec2::new(0.1, 0.6));
        assert!(is_inside_triangle(a, b, c, Vec2::new(0.2, 0.2)));
        assert!(!is_inside_triangle(a, b, c, Vec2::new(0.5, 0.5)));
        assert!(!is_inside_triangle(a, b, c, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_vertices_are_inside() {
        let t = Triangle::new(Vec2::new(0.2, 0.3), Vec2::new(0.7, 0.4), Vec2::new(0.4, 0.9));
        for v in t.vertices() {
            assert!(t.contains(v));
        }
        assert!(t.contains(t.centroid()));
    }

    #[test]
    fn test_degenerate_triangle() {
        // Collinear points: zero area
        let (a, b, c) = (Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 0.0));
        assert!(!is_inside_triangle(a, b, c, Vec2::new(0.5, 0.5)));
        assert!(!is_inside_triangle(a, b, c, Vec2::new(0.9, 0.3)));
        assert!(!is_inside_triangle(a, b, c, Vec2::new(0.2, -0.4)));
    }

    #[test]
    fn test_contains_any() {
        let t = Triangle::new(Vec2::new(0.1, 0.1), Vec2::new(0.6, 0.1), Vec2::new(0.1, 0.6));
        assert!(t.contains_any(&[Vec2::new(0.9, 0.9), Vec2::new(0.2, 0.2)]));
        assert!(!t.contains_any(&[Vec2::new(0.9, 0.9), Vec2::new(0.8, 0.1)]));
        assert!(!t.contains_any(&[]));
    }

    fn unit_point() -> impl Strategy<Value = Vec2> {
        (0.0f32..1.0, 0.0f32..1.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_agrees_with_barycentric(
            p1 in unit_point(),
            p2 in unit_point(),
            p3 in unit_point(),
            p in unit_point(),
        ) {
            let inside = is_inside_triangle(p1, p2, p3, p);
            if sign_test_inside(p1, p2, p3, p) {
                prop_assert!(inside);
            }
            if inside {
                // Anything the area test accepts is outside by at most the tolerance
                let excess = triangle_area(p, p2, p3) + triangle_area(p1, p, p3)
                    + triangle_area(p1, p2, p) - triangle_area(p1, p2, p3);
                prop_assert!(excess <= AREA_TOLERANCE + 1e-4);
            }
        }

        #[test]
        fn prop_vertices_inside(p1 in unit_point(), p2 in unit_point(), p3 in unit_point()) {
            prop_assert!(is_inside_triangle(p1, p2, p3, p1));
            prop_assert!(is_inside_triangle(p1, p2, p3, p2));
            prop_assert!(is_inside_triangle(p1, p2, p3, p3));
        }
    }
}
