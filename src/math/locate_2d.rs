use std::f64::consts::PI;

use super::angle_2d::{angle_at, half_plane_det, on_vertex};
use super::{Point2, TOLERANCE};

/// Position of a query point relative to a single polygon ring.
///
/// `OnBoundary` covers both exact vertex coincidence and points in the
/// interior of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    Outside,
    OnBoundary,
}

/// Ray-crossing point-in-polygon test.
///
/// Casts two opposite horizontal rays from `q` and counts edge crossings
/// for each: `kl` for the left-going ray, `kr` for the right-going one.
/// The parities can only disagree when `q` lies exactly on an edge, which
/// is how boundary coincidence is detected without a tolerance. Otherwise
/// an odd `kr` means `q` is enclosed.
///
/// `verts` is a closed ring; the edge from the last vertex back to the
/// first is implicit. Callers must supply at least 3 vertices describing
/// a simple ring — behavior on degenerate input is unspecified.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ray_crossing(q: &Point2, verts: &[Point2]) -> PointLocation {
    let mut kl = 0u32;
    let mut kr = 0u32;
    let n = verts.len();

    for i in 0..n {
        // Translate both edge endpoints into a frame centered at q.
        let p1x = verts[i].x - q.x;
        let p1y = verts[i].y - q.y;
        let p2x = verts[(i + 1) % n].x - q.x;
        let p2y = verts[(i + 1) % n].y - q.y;

        // q coincides with a vertex.
        if p1x == 0.0 && p1y == 0.0 {
            return PointLocation::OnBoundary;
        }

        // Horizontal edge: cannot cross a horizontal ray except by
        // overlapping it entirely, skip.
        if p2y - p1y == 0.0 {
            continue;
        }

        // x-coordinate where the edge crosses the line y = 0.
        let xm = (p2x * p1y - p1x * p2y) / (p2y - p1y);

        // Edge straddles the ray on the lower side, intercept left of q.
        if (p2y < 0.0) != (p1y < 0.0) && xm < 0.0 {
            kl += 1;
        }

        // Edge straddles the ray on the upper side, intercept right of q.
        if (p2y > 0.0) != (p1y > 0.0) && xm > 0.0 {
            kr += 1;
        }
    }

    // The opposite rays disagree only when q sits exactly on an edge.
    if kl % 2 != kr % 2 {
        return PointLocation::OnBoundary;
    }

    if kr % 2 == 1 {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

/// Winding-number point-in-polygon test.
///
/// Accumulates the signed angle the ring sweeps around `q`: the unsigned
/// angle subtended at `q` by each edge, added for edges whose left
/// half-plane contains `q` and subtracted otherwise. A total of ±2π
/// (within [`TOLERANCE`]) means `q` is enclosed.
///
/// A query point collinear with an edge line subtends an angle of π iff
/// it lies between the edge's endpoints; that case returns `OnBoundary`,
/// while collinear-but-outside edges contribute nothing.
///
/// Same ring conventions and preconditions as [`ray_crossing`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn winding_number(q: &Point2, verts: &[Point2]) -> PointLocation {
    let mut omega_sum = 0.0;
    let n = verts.len();

    for i in 0..n {
        let this = &verts[i];
        let next = &verts[(i + 1) % n];

        if on_vertex(q, this) {
            return PointLocation::OnBoundary;
        }

        let det = half_plane_det(q, this, next);
        let omega = angle_at(q, this, next);

        if det == 0.0 {
            if (omega - PI).abs() <= TOLERANCE {
                return PointLocation::OnBoundary;
            }
            // Collinear with the edge line but outside the segment.
            continue;
        }

        if det > 0.0 {
            omega_sum += omega;
        } else {
            omega_sum -= omega;
        }
    }

    if (omega_sum.abs() - 2.0 * PI).abs() <= TOLERANCE {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}
