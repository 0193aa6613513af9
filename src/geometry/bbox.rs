use crate::math::Point2;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Smallest box enclosing `points`, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    /// Inclusive containment test: points on the box edges are inside.
    #[must_use]
    pub fn contains(&self, q: &Point2) -> bool {
        q.x >= self.min.x && q.x <= self.max.x && q.y >= self.min.y && q.y <= self.max.y
    }

    /// Smallest box enclosing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Extent along the x axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along the y axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Min-max box pre-filter: `true` iff `q` falls within the inclusive
/// bounds of the ring's vertices. Cheap rejection test applied before the
/// full point-location predicates; an empty ring rejects everything.
#[must_use]
pub fn in_bounding_box(q: &Point2, verts: &[Point2]) -> bool {
    Aabb::from_points(verts).is_some_and(|b| b.contains(q))
}
