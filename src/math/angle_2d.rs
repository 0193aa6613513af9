use super::Point2;

/// Half-plane determinant of `q` against the directed edge `p1 → p2`.
///
/// Positive when `q` lies in the left half-plane, negative in the right,
/// zero when `q` is collinear with the edge line.
#[must_use]
pub fn half_plane_det(q: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    (p2.x - p1.x) * (q.y - p1.y) - (p2.y - p1.y) * (q.x - p1.x)
}

/// Unsigned angle at `q` subtended by `p1` and `p2`.
///
/// The cosine is clamped to `[-1, 1]` before inversion so floating rounding
/// cannot push it out of the `acos` domain. If either of the vectors
/// `q → p1`, `q → p2` has zero length the angle is defined as 0.
#[must_use]
pub fn angle_at(q: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    let v1 = p1 - q;
    let v2 = p2 - q;

    let norm = v1.norm() * v2.norm();
    if norm == 0.0 {
        return 0.0;
    }

    (v1.dot(&v2) / norm).clamp(-1.0, 1.0).acos()
}

/// Exact coordinate equality between the query point and a vertex.
///
/// No tolerance is applied: a coordinate that differs by a single ulp is
/// not on the vertex. This is intentional; widening it with an epsilon
/// changes boundary classification at vertices.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn on_vertex(q: &Point2, p: &Point2) -> bool {
    q.x == p.x && q.y == p.y
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    // ── half_plane_det tests ──

    #[test]
    fn det_left_of_edge() {
        let q = Point2::new(0.0, 1.0);
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(1.0, 0.0);
        assert!(half_plane_det(&q, &p1, &p2) > 0.0);
    }

    #[test]
    fn det_right_of_edge() {
        let q = Point2::new(0.0, -1.0);
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(1.0, 0.0);
        assert!(half_plane_det(&q, &p1, &p2) < 0.0);
    }

    #[test]
    fn det_collinear_is_zero() {
        let q = Point2::new(2.0, 2.0);
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(1.0, 1.0);
        assert_relative_eq!(half_plane_det(&q, &p1, &p2), 0.0);
    }

    // ── angle_at tests ──

    #[test]
    fn angle_right_angle() {
        let q = Point2::new(0.0, 0.0);
        let p1 = Point2::new(1.0, 0.0);
        let p2 = Point2::new(0.0, 1.0);
        assert_relative_eq!(angle_at(&q, &p1, &p2), FRAC_PI_2);
    }

    #[test]
    fn angle_between_opposite_directions_is_pi() {
        // q strictly between p1 and p2 on a line.
        let q = Point2::new(1.0, 1.0);
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(2.0, 2.0);
        assert_relative_eq!(angle_at(&q, &p1, &p2), PI);
    }

    #[test]
    fn angle_same_direction_is_zero() {
        let q = Point2::new(0.0, 0.0);
        let p1 = Point2::new(1.0, 0.0);
        let p2 = Point2::new(3.0, 0.0);
        assert_relative_eq!(angle_at(&q, &p1, &p2), 0.0);
    }

    #[test]
    fn angle_zero_length_vector() {
        // q coincides with p1, so q → p1 has zero length.
        let q = Point2::new(1.0, 1.0);
        let p1 = Point2::new(1.0, 1.0);
        let p2 = Point2::new(5.0, 5.0);
        assert_relative_eq!(angle_at(&q, &p1, &p2), 0.0);
    }

    // ── on_vertex tests ──

    #[test]
    fn on_vertex_exact_match() {
        let q = Point2::new(3.5, -2.25);
        assert!(on_vertex(&q, &Point2::new(3.5, -2.25)));
    }

    #[test]
    fn on_vertex_no_tolerance() {
        let q = Point2::new(1.0, 1.0);
        assert!(!on_vertex(&q, &Point2::new(1.0 + 1e-15, 1.0)));
    }
}
