use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, PolygonSet};
use crate::math::Point2;

/// Fits a polygon set into a `width × height` viewport.
///
/// The set's joint bounding box is mapped onto the viewport rectangle and
/// the y axis is flipped, so geometry with y growing upward lands in a
/// screen-style coordinate space with the origin at the top left.
pub struct FitToViewport {
    width: f64,
    height: f64,
}

impl FitToViewport {
    /// Creates a new `FitToViewport` transform.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Executes the transform, returning a remapped copy of the set.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the set has no bounds
    /// (empty) or its bounds have zero extent along either axis.
    pub fn execute(&self, set: &PolygonSet) -> Result<PolygonSet> {
        let bounds = set.bounds().ok_or_else(|| {
            OperationError::InvalidInput("cannot fit an empty polygon set".to_owned())
        })?;

        let dx = bounds.width();
        let dy = bounds.height();
        if dx <= 0.0 || dy <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "degenerate bounds: extent {dx} x {dy}"
            ))
            .into());
        }

        let fitted = set
            .iter()
            .map(|polygon| {
                let vertices = polygon
                    .vertices()
                    .iter()
                    .map(|v| {
                        Point2::new(
                            (v.x - bounds.min.x) / dx * self.width,
                            self.height - (v.y - bounds.min.y) / dy * self.height,
                        )
                    })
                    .collect();
                Polygon::new(vertices)
            })
            .collect();

        Ok(PolygonSet::new(fitted))
    }
}
