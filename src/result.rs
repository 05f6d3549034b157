use ndarray::Array2;
use ndarray_stats::QuantileExt;
use std::fmt;

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::array;

    #[test]
    fn extent_from_half_range() {
        let field = FringeField::new(Array2::zeros((3, 3)), 30.0);
        assert_eq!(field.extent, [-30.0, 30.0, -30.0, 30.0]);
        assert_eq!(field.resolution(), 3);
    }

    #[test]
    fn stats() {
        let field = FringeField::new(array![[0.0, 1.0], [2.0, 1.0]], 10.0);
        assert_eq!(field.min(), 0.0);
        assert_eq!(field.max(), 2.0);
        assert_eq!(field.mean(), 1.0);
    }
}

/// Computed fringe intensity over the simulated field of view, together with
/// the angular bounding extent to display it against.
#[derive(Debug, Clone, PartialEq)]
pub struct FringeField {
    pub intensity: Array2<f32>,
    /// `[x_min, x_max, y_min, y_max]` in degrees of incidence angle.
    pub extent: [f32; 4],
}

impl FringeField {
    pub fn new(intensity: Array2<f32>, half_range: f32) -> Self {
        Self {
            intensity,
            extent: [-half_range, half_range, -half_range, half_range],
        }
    }

    /// Number of samples per axis.
    pub fn resolution(&self) -> usize {
        self.intensity.nrows()
    }

    pub fn min(&self) -> f32 {
        *self.intensity.min_skipnan()
    }

    pub fn max(&self) -> f32 {
        *self.intensity.max_skipnan()
    }

    pub fn mean(&self) -> f32 {
        self.intensity.mean().unwrap_or(0.0)
    }
}

impl fmt::Display for FringeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fringe field:")?;
        writeln!(
            f,
            "  Grid:      {} x {}",
            self.resolution(),
            self.resolution()
        )?;
        writeln!(
            f,
            "  Extent:    [{:.1}, {:.1}] deg on both axes",
            self.extent[0], self.extent[1]
        )?;
        writeln!(f, "  Intensity: min {:.6}", self.min())?;
        writeln!(f, "             max {:.6}", self.max())?;
        writeln!(f, "             mean {:.6}", self.mean())
    }
}
