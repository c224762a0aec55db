//! # Bevelled Outlines
//!
//! Closed polygon outlines lying in the XZ plane (y held at zero). The
//! container wall is the extrusion of one outer outline with one inner hole.
//!
//! Outlines are built in path coordinates where `x` maps to world X and the
//! second coordinate maps straight to world Z. Rectangles span
//! `x ∈ [0, width]` and `z ∈ [-height, 0]`, so the container grows towards
//! +X and -Z from its root.

use cgmath::{InnerSpace, Vector2, Vector3};
use std::f32::consts::{FRAC_1_SQRT_2, TAU};

/// Closed ordered sequence of points describing a polygon boundary.
///
/// The closing edge from the last point back to the first is implicit; the
/// first point is never repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Vector3<f32>>,
}

impl Outline {
    pub fn new(points: Vec<Vector3<f32>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vector3<f32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Moves every point by `dx` along X and `dz` along Z
    pub fn translated(mut self, dx: f32, dz: f32) -> Self {
        for point in &mut self.points {
            point.x += dx;
            point.z += dz;
        }
        self
    }

    /// Bounding rectangle as `(min, max)` in (x, z), or `None` when empty
    pub fn bounds(&self) -> Option<(Vector2<f32>, Vector2<f32>)> {
        let first = self.points.first()?;
        let mut min = Vector2::new(first.x, first.z);
        let mut max = min;

        for point in self.points.iter().skip(1) {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.z);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.z);
        }

        Some((min, max))
    }

    /// Shoelace area over (x, z). Positive means counter-clockwise.
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let twice_area: f32 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.z - b.x * a.z
            })
            .sum();

        twice_area * 0.5
    }
}

/// Produces the outline of a `width × height` rectangle whose four corners are
/// replaced by quarter circles of radius `corner_size`.
///
/// The outline is traced counter-clockwise starting at `(0, -corner_size)` and
/// running down the left edge. Each corner arc is discretized into
/// `corner_segments` segments, giving `4 * (corner_segments + 1)` points.
///
/// Callers must keep `corner_size < min(width, height) / 2`; beyond that the
/// straight runs have non-positive length and the outline self-intersects.
pub fn make_bevelled_rectangle(
    width: f32,
    height: f32,
    corner_size: f32,
    corner_segments: u32,
) -> Outline {
    let c = corner_size;
    let segments = corner_segments.max(1);
    // Arc midpoints sit this far in from both edges of their corner.
    let inset = c * (1.0 - FRAC_1_SQRT_2);

    let mut path = PathBuilder::new(Vector2::new(0.0, -c));

    path.line_to(Vector2::new(0.0, -(height - c)));
    path.arc_to(
        Vector2::new(inset, -height + inset),
        Vector2::new(c, -height),
        segments,
    );

    path.line_to(Vector2::new(width - c, -height));
    path.arc_to(
        Vector2::new(width - inset, -height + inset),
        Vector2::new(width, -(height - c)),
        segments,
    );

    path.line_to(Vector2::new(width, -c));
    path.arc_to(
        Vector2::new(width - inset, -inset),
        Vector2::new(width - c, 0.0),
        segments,
    );

    path.line_to(Vector2::new(c, 0.0));
    path.arc_to(
        Vector2::new(inset, -inset),
        Vector2::new(0.0, -c),
        segments,
    );

    path.close()
}

/// Minimal 2D path with straight and three-point arc segments
struct PathBuilder {
    points: Vec<Vector2<f32>>,
}

impl PathBuilder {
    fn new(start: Vector2<f32>) -> Self {
        Self {
            points: vec![start],
        }
    }

    fn current(&self) -> Vector2<f32> {
        // never empty: seeded with the start point
        self.points[self.points.len() - 1]
    }

    fn line_to(&mut self, point: Vector2<f32>) {
        self.points.push(point);
    }

    /// Adds a circular arc from the current point through `through` to `end`.
    ///
    /// Collinear points degrade to a straight line.
    fn arc_to(&mut self, through: Vector2<f32>, end: Vector2<f32>, segments: u32) {
        let start = self.current();
        let Some(center) = circumcenter(start, through, end) else {
            self.line_to(end);
            return;
        };

        let radius = (start - center).magnitude();
        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let end_angle = (end.y - center.y).atan2(end.x - center.x);

        let turn = (through - start).perp_dot(end - through);
        let mut sweep = end_angle - start_angle;
        if turn > 0.0 {
            // counter-clockwise: sweep in (0, TAU]
            while sweep <= 0.0 {
                sweep += TAU;
            }
        } else {
            while sweep >= 0.0 {
                sweep -= TAU;
            }
        }

        for i in 1..segments {
            let angle = start_angle + sweep * (i as f32 / segments as f32);
            self.points.push(Vector2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
        // Land exactly on the requested end point.
        self.points.push(end);
    }

    fn close(mut self) -> Outline {
        if self.points.len() > 1 && self.points[0] == self.current() {
            self.points.pop();
        }

        Outline::new(
            self.points
                .into_iter()
                .map(|p| Vector3::new(p.x, 0.0, p.y))
                .collect(),
        )
    }
}

fn circumcenter(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> Option<Vector2<f32>> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < f32::EPSILON {
        return None;
    }

    let a2 = a.magnitude2();
    let b2 = b.magnitude2();
    let c2 = c.magnitude2();

    Some(Vector2::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn segments_intersect(p1: Vector2<f32>, p2: Vector2<f32>, q1: Vector2<f32>, q2: Vector2<f32>) -> bool {
        let d1 = (p2 - p1).perp_dot(q1 - p1);
        let d2 = (p2 - p1).perp_dot(q2 - p1);
        let d3 = (q2 - q1).perp_dot(p1 - q1);
        let d4 = (q2 - q1).perp_dot(p2 - q1);
        d1 * d2 < 0.0 && d3 * d4 < 0.0
    }

    #[test]
    fn test_bounding_box_matches_dimensions() {
        for &(width, height) in &[(100.0, 50.0), (19.0, 19.0), (154.0, 79.0), (8.0, 30.0)] {
            let outline = make_bevelled_rectangle(width, height, 2.0, 36);
            let (min, max) = outline.bounds().unwrap();

            assert!((min.x - 0.0).abs() < EPS, "min x {}", min.x);
            assert!((max.x - width).abs() < EPS, "max x {}", max.x);
            assert!((min.y + height).abs() < EPS, "min z {}", min.y);
            assert!((max.y - 0.0).abs() < EPS, "max z {}", max.y);
        }
    }

    #[test]
    fn test_point_count_and_closure() {
        let outline = make_bevelled_rectangle(100.0, 50.0, 2.0, 36);
        assert_eq!(outline.len(), 4 * 37);

        let first = outline.points()[0];
        let last = outline.points()[outline.len() - 1];
        assert_eq!(first, Vector3::new(0.0, 0.0, -2.0));
        assert!(first != last);
        // closing edge is one arc step, not a long jump
        assert!((first - last).magnitude() < 0.2);
    }

    #[test]
    fn test_counter_clockwise_and_flat() {
        let outline = make_bevelled_rectangle(40.0, 20.0, 2.0, 8);
        assert!(outline.signed_area() > 0.0);
        assert!(outline.points().iter().all(|p| p.y == 0.0));

        // area of a rounded rectangle: w*h - (4 - pi) * r^2
        let expected = 40.0 * 20.0 - (4.0 - std::f32::consts::PI) * 4.0;
        assert!((outline.signed_area() - expected).abs() < 0.5);
    }

    #[test]
    fn test_not_self_intersecting() {
        let outline = make_bevelled_rectangle(30.0, 19.0, 2.0, 6);
        let points: Vec<Vector2<f32>> = outline
            .points()
            .iter()
            .map(|p| Vector2::new(p.x, p.z))
            .collect();
        let n = points.len();

        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                assert!(
                    !segments_intersect(points[i], points[(i + 1) % n], points[j], points[(j + 1) % n]),
                    "edges {} and {} cross",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_arc_points_stay_on_corner_circle() {
        let outline = make_bevelled_rectangle(50.0, 30.0, 2.0, 12);
        let center = Vector2::new(2.0, -28.0);
        // the first corner arc directly follows the left edge end point
        for point in &outline.points()[2..13] {
            let distance = (Vector2::new(point.x, point.z) - center).magnitude();
            assert!((distance - 2.0).abs() < EPS);
        }
    }

    #[test]
    fn test_translated_hole_is_centered() {
        let hole = make_bevelled_rectangle(98.0, 48.0, 2.0, 36).translated(1.0, -1.0);
        let (min, max) = hole.bounds().unwrap();
        assert!((min.x - 1.0).abs() < EPS);
        assert!((max.x - 99.0).abs() < EPS);
        assert!((min.y + 49.0).abs() < EPS);
        assert!((max.y + 1.0).abs() < EPS);
    }

    #[test]
    fn test_collinear_arc_becomes_line() {
        let mut path = PathBuilder::new(Vector2::new(0.0, 0.0));
        path.arc_to(Vector2::new(1.0, 0.0), Vector2::new(2.0, 0.0), 8);
        assert_eq!(path.points.len(), 2);
    }
}
