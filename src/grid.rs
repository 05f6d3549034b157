use ndarray::Array1;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn axis_spans_range() {
        let axis = angle_axis(30.0, 5);
        assert_eq!(axis.len(), 5);
        assert!((axis[0] + 30.0).abs() < 1e-5);
        assert!((axis[2]).abs() < 1e-5);
        assert!((axis[4] - 30.0).abs() < 1e-5);
    }

    #[test]
    fn radial_angle_is_unsigned() {
        assert_eq!(radial_angle(0.0, 0.0), 0.0);
        assert!((radial_angle(3.0, 4.0) - 5.0).abs() < 1e-5);
        assert_eq!(radial_angle(-3.0, 4.0), radial_angle(3.0, -4.0));
    }
}

/// Evenly spaced angular coordinates spanning `[-half_range, half_range]`
/// degrees, `resolution` samples.
pub fn angle_axis(half_range: f32, resolution: usize) -> Array1<f32> {
    Array1::linspace(-half_range, half_range, resolution)
}

/// Radial incidence angle in degrees for the grid point at `(x, y)` degrees.
/// Measured from the optical axis, so it is unsigned and the resulting
/// pattern is circularly symmetric.
pub fn radial_angle(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}
