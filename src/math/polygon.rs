use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Computes the unit normal of a planar polygon using Newell's method.
///
/// Works for convex and concave loops; the normal direction follows the
/// winding of the points (counter-clockwise winding gives the right-hand
/// normal).
///
/// # Errors
///
/// Returns an error if the polygon is degenerate (collinear or too small
/// to define a plane).
pub fn newell_normal(points: &[Point3]) -> Result<Vector3> {
    let n = points.len();
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(
            GeometryError::Degenerate("polygon does not define a plane".into()).into(),
        );
    }
    Ok(normal / len)
}

/// Computes the area of a planar polygon embedded in 3D.
///
/// Uses the cross-product accumulation form of the shoelace formula, so the
/// result is independent of the polygon's orientation and position. Returns
/// `0.0` for loops with fewer than three points.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let origin = points[0];
    let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
    for i in 1..points.len() - 1 {
        let a = points[i] - origin;
        let b = points[i + 1] - origin;
        cross_sum += a.cross(&b);
    }
    cross_sum.norm() * 0.5
}

/// Computes the vertex centroid of a polygon loop.
///
/// This is the arithmetic mean of the vertices, not the area centroid; it
/// matches what the massing pipeline needs for position grouping.
#[must_use]
pub fn vertex_centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let mut sum = Vector3::new(0.0, 0.0, 0.0);
    for p in points {
        sum += p.coords;
    }
    #[allow(clippy::cast_precision_loss)]
    let inv = 1.0 / points.len() as f64;
    Point3::from(sum * inv)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn newell_normal_ccw_square_points_up() {
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        let n = newell_normal(&pts).unwrap();
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn newell_normal_cw_square_points_down() {
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 0.0, 0.0),
        ];
        let n = newell_normal(&pts).unwrap();
        assert_relative_eq!(n.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn newell_normal_collinear_is_error() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        assert!(newell_normal(&pts).is_err());
    }

    #[test]
    fn area_of_unit_square() {
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        assert_relative_eq!(polygon_area(&pts), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn area_of_l_shape() {
        // 4x4 square with a 2x2 corner bite taken out.
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 2.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(2.0, 4.0, 0.0),
            p(0.0, 4.0, 0.0),
        ];
        assert_relative_eq!(polygon_area(&pts), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn area_is_orientation_independent() {
        let ccw = vec![
            p(0.0, 0.0, 1.0),
            p(3.0, 0.0, 1.0),
            p(3.0, 2.0, 1.0),
            p(0.0, 2.0, 1.0),
        ];
        let cw: Vec<Point3> = ccw.iter().rev().copied().collect();
        assert_relative_eq!(polygon_area(&ccw), polygon_area(&cw), epsilon = 1e-12);
    }

    #[test]
    fn area_of_tilted_triangle() {
        // Right triangle with legs 3 and 4 lying in a tilted plane.
        let pts = vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 3.0), p(0.0, 4.0, 0.0)];
        let a = (pts[1] - pts[0]).norm();
        assert_relative_eq!(polygon_area(&pts), a * 4.0 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_square() {
        let pts = vec![
            p(0.0, 0.0, 2.0),
            p(2.0, 0.0, 2.0),
            p(2.0, 2.0, 2.0),
            p(0.0, 2.0, 2.0),
        ];
        let c = vertex_centroid(&pts);
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 2.0, epsilon = 1e-12);
    }
}
