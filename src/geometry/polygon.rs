use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::bbox::Aabb;

/// A simple closed polygon ring.
///
/// The edge connecting the last vertex back to the first is implicit; no
/// closing duplicate vertex is stored. Vertices are read-only after
/// construction. The point-location predicates assume the ring is simple
/// (non-self-intersecting) and has at least 3 vertices; neither is
/// enforced by [`Polygon::new`] — use [`Polygon::validated`] at the
/// boundary where untrusted geometry enters.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from a finalized vertex ring without validation.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon, checking the preconditions the predicates rely
    /// on: at least 3 vertices, all coordinates finite. Ring simplicity is
    /// not checked.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for fewer than 3 vertices and
    /// [`GeometryError::NonFiniteCoordinate`] for NaN or infinite
    /// coordinates.
    pub fn validated(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "ring has {} vertices, need at least 3",
                vertices.len()
            ))
            .into());
        }
        for v in &vertices {
            if !v.x.is_finite() || !v.y.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { x: v.x, y: v.y }.into());
            }
        }
        Ok(Self { vertices })
    }

    /// The vertex ring.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices (equal to the number of edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The `i`-th vertex, with wraparound indexing.
    ///
    /// # Panics
    ///
    /// Panics if the polygon has no vertices.
    #[must_use]
    pub fn vertex(&self, i: usize) -> &Point2 {
        &self.vertices[i % self.vertices.len()]
    }

    /// The `i`-th directed edge `(v[i], v[(i + 1) mod n])`. Edge `n - 1`
    /// is the implicit closing edge back to vertex 0.
    ///
    /// # Panics
    ///
    /// Panics if the polygon has no vertices.
    #[must_use]
    pub fn edge(&self, i: usize) -> (&Point2, &Point2) {
        (self.vertex(i), self.vertex(i + 1))
    }

    /// Bounding box over the vertices, recomputed on each call. `None`
    /// for an empty polygon.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::new(vertices)
    }
}

/// An ordered collection of polygons.
///
/// Order is significant: the set query reports the first polygon, in
/// insertion order, that strictly contains the query point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Appends a polygon at the end of the scan order.
    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Polygon> {
        self.polygons.get(i)
    }

    /// Iterates the polygons in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Joint bounding box over all member polygons. `None` when the set
    /// is empty or every member is.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.polygons
            .iter()
            .filter_map(Polygon::bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}

impl From<Vec<Polygon>> for PolygonSet {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PointlocError;

    const TOL: f64 = 1e-12;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        ])
    }

    #[test]
    fn vertex_wraparound() {
        let t = triangle();
        assert!((t.vertex(3).x).abs() < TOL);
        assert!((t.vertex(4).x - 4.0).abs() < TOL);
    }

    #[test]
    fn closing_edge_is_implicit() {
        let t = triangle();
        let (a, b) = t.edge(2);
        assert!((a.y - 3.0).abs() < TOL);
        assert!((b.x).abs() < TOL);
        assert!((b.y).abs() < TOL);
    }

    #[test]
    fn bounds_over_vertices() {
        let b = triangle().bounds().unwrap();
        assert!((b.max.x - 4.0).abs() < TOL);
        assert!((b.max.y - 3.0).abs() < TOL);
    }

    #[test]
    fn validated_rejects_short_ring() {
        let err = Polygon::validated(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, PointlocError::Geometry(_)));
    }

    #[test]
    fn validated_rejects_nan() {
        let err = Polygon::validated(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, f64::NAN),
            Point2::new(0.0, 1.0),
        ])
        .unwrap_err();
        assert!(matches!(err, PointlocError::Geometry(_)));
    }

    #[test]
    fn validated_accepts_triangle() {
        assert!(Polygon::validated(triangle().vertices().to_vec()).is_ok());
    }

    #[test]
    fn set_bounds_union() {
        let set = PolygonSet::new(vec![
            triangle(),
            Polygon::new(vec![
                Point2::new(10.0, 10.0),
                Point2::new(12.0, 10.0),
                Point2::new(12.0, 12.0),
            ]),
        ]);
        let b = set.bounds().unwrap();
        assert!((b.min.x).abs() < TOL);
        assert!((b.max.x - 12.0).abs() < TOL);
        assert!((b.max.y - 12.0).abs() < TOL);
    }

    #[test]
    fn empty_set_has_no_bounds() {
        assert!(PolygonSet::default().bounds().is_none());
    }
}
