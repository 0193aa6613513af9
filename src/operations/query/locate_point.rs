use crate::geometry::{in_bounding_box, Polygon, PolygonSet};
use crate::math::locate_2d::{ray_crossing, winding_number, PointLocation};
use crate::math::Point2;

/// Point-in-polygon predicate selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Predicate {
    #[default]
    RayCrossing,
    WindingNumber,
}

impl Predicate {
    /// Evaluates this predicate for `q` against a single polygon ring.
    #[must_use]
    pub fn evaluate(self, q: &Point2, polygon: &Polygon) -> PointLocation {
        match self {
            Self::RayCrossing => ray_crossing(q, polygon.vertices()),
            Self::WindingNumber => winding_number(q, polygon.vertices()),
        }
    }
}

/// Outcome of locating a point against a polygon set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateReport {
    /// Aggregate location over the whole set.
    pub location: PointLocation,
    /// Indices of polygons to highlight, in scan order: every boundary
    /// match plus, last, the single inside match if one fired.
    pub highlighted: Vec<usize>,
    /// Number of polygons whose boundary passes through the query point.
    pub boundary_count: usize,
}

impl LocateReport {
    /// Human-readable phrasing of the outcome.
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.location, self.boundary_count) {
            (PointLocation::Inside, _) => "The point is inside one of the polygons.".to_owned(),
            (PointLocation::OnBoundary, 1) => {
                "The point is on the boundary of a polygon.".to_owned()
            }
            (PointLocation::OnBoundary, n) => format!("The point is shared by {n} polygons."),
            (PointLocation::Outside, _) => "The point is outside all polygons.".to_owned(),
        }
    }
}

/// Locates a query point relative to every polygon in a set.
///
/// Each polygon is pre-filtered by its bounding box, then evaluated with
/// the selected predicate. Boundary matches are collected exhaustively
/// across the whole set; the scan stops at the first polygon that
/// strictly contains the point, so an interior hit always reports the
/// earliest qualifying polygon in collection order.
pub struct LocatePoint {
    point: Point2,
    predicate: Predicate,
}

impl LocatePoint {
    /// Creates a new `LocatePoint` query.
    #[must_use]
    pub fn new(point: Point2, predicate: Predicate) -> Self {
        Self { point, predicate }
    }

    /// Executes the query against `set`.
    ///
    /// The aggregate location is `Inside` if any polygon strictly
    /// contains the point, `OnBoundary` if at least one boundary passes
    /// through it (and none contains it), and `Outside` otherwise.
    #[must_use]
    pub fn execute(&self, set: &PolygonSet) -> LocateReport {
        let mut highlighted = Vec::new();
        let mut boundary_count = 0usize;
        let mut location = PointLocation::Outside;

        for (i, polygon) in set.iter().enumerate() {
            if !in_bounding_box(&self.point, polygon.vertices()) {
                continue;
            }

            match self.predicate.evaluate(&self.point, polygon) {
                PointLocation::OnBoundary => {
                    highlighted.push(i);
                    boundary_count += 1;
                }
                PointLocation::Inside => {
                    highlighted.push(i);
                    location = PointLocation::Inside;
                    break;
                }
                PointLocation::Outside => {}
            }
        }

        if location != PointLocation::Inside && boundary_count > 0 {
            location = PointLocation::OnBoundary;
        }

        LocateReport {
            location,
            highlighted,
            boundary_count,
        }
    }
}
