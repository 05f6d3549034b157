use std::f32::consts::PI;

use ndarray::Array2;
use rayon::prelude::*;

use crate::{grid, output, result::FringeField, settings::Settings, sweep};

#[cfg(test)]
mod tests {

    use super::*;
    use crate::settings;

    fn test_settings() -> Settings {
        let mut settings = settings::load_default_config().unwrap();
        // Odd, reduced resolution so the grid has an exact on-axis sample
        settings.resolution = 101;
        settings
    }

    #[test]
    fn centre_matches_closed_form() {
        let pattern = Pattern::new(test_settings());
        let field = pattern.compute();

        let s = &pattern.settings;
        let mid = s.resolution / 2;
        let expected = intensity(
            phase_difference(0.0, s.refr_index, s.thickness, s.wavelength),
            s.intensity_max,
        );
        assert!((field.intensity[[mid, mid]] - expected).abs() < 1e-4);
    }

    #[test]
    fn set_touches_one_parameter() {
        let mut pattern = Pattern::new(test_settings());
        let before = pattern.settings.clone();
        pattern.set(Param::Thickness, 2400.0);
        assert_eq!(pattern.settings.thickness, 2400.0);
        assert_eq!(pattern.settings.wavelength, before.wavelength);
        assert_eq!(pattern.settings.refr_index, before.refr_index);
        assert_eq!(pattern.settings.angle_range, before.angle_range);
    }

    #[test]
    fn reset_restores_initial_parameters() {
        let mut pattern = Pattern::new(test_settings());
        let initial = pattern.settings.clone();
        pattern.set(Param::Wavelength, 450.0);
        pattern.set(Param::RefrIndex, 1.5);
        pattern.set(Param::Thickness, 4200.0);
        pattern.set(Param::AngleRange, 10.0);
        pattern.reset();
        assert_eq!(pattern.settings, initial);
    }

    #[test]
    fn step_applies_sweep_schedule() {
        let mut pattern = Pattern::new(test_settings());
        let field = pattern.step(0, 30);
        assert_eq!(pattern.settings.thickness, sweep::thickness_at(0, 30));
        assert_eq!(field.resolution(), pattern.settings.resolution);
    }
}

/// One of the four interactively controlled parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Wavelength,
    RefrIndex,
    Thickness,
    AngleRange,
}

/// A fringe pattern to be evaluated over a square angular field of view.
///
/// Holds the live parameter set mutated by the UI layer and a copy of the
/// construction-time values for `reset`. Recomputation is always explicit;
/// mutating a parameter never triggers it.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub settings: Settings,
    initial: Settings,
}

impl Pattern {
    pub fn new(settings: Settings) -> Self {
        Self {
            initial: settings.clone(),
            settings,
        }
    }

    /// Mutates exactly one interactive parameter. Values are taken as-is;
    /// the UI controls own the bounds, and out-of-range inputs simply
    /// propagate into the arithmetic.
    pub fn set(&mut self, param: Param, value: f32) {
        match param {
            Param::Wavelength => self.settings.wavelength = value,
            Param::RefrIndex => self.settings.refr_index = value,
            Param::Thickness => self.settings.thickness = value,
            Param::AngleRange => self.settings.angle_range = value,
        }
    }

    /// Restores the four interactive parameters to their construction-time
    /// values. The caller recomputes.
    pub fn reset(&mut self) {
        self.settings.wavelength = self.initial.wavelength;
        self.settings.refr_index = self.initial.refr_index;
        self.settings.thickness = self.initial.thickness;
        self.settings.angle_range = self.initial.angle_range;
    }

    /// Evaluates the intensity law over the full angular grid.
    ///
    /// Rows are independent, so they are fanned out across the thread pool.
    pub fn compute(&self) -> FringeField {
        let s = &self.settings;
        let axis = grid::angle_axis(s.angle_range, s.resolution).to_vec();

        let values: Vec<f32> = axis
            .par_iter()
            .flat_map_iter(|&y| {
                let axis = &axis;
                axis.iter().map(move |&x| {
                    let theta = grid::radial_angle(x, y).to_radians();
                    intensity(
                        phase_difference(theta, s.refr_index, s.thickness, s.wavelength),
                        s.intensity_max,
                    )
                })
            })
            .collect();

        let field = Array2::from_shape_vec((s.resolution, s.resolution), values)
            .expect("grid dimensions mismatch");

        FringeField::new(field, s.angle_range)
    }

    /// Advances the thickness sweep to `frame` of `frames` and recomputes.
    pub fn step(&mut self, frame: usize, frames: usize) -> FringeField {
        self.settings.thickness = sweep::thickness_at(frame, frames);
        self.compute()
    }

    pub fn writeup(&self, field: &FringeField) {
        let _ = output::write_field(field, "", &self.settings.directory);
        let _ = output::write_settings(&self.settings, &self.settings.directory);
        let _ = output::write_summary(
            &self.settings,
            std::slice::from_ref(field),
            &self.settings.directory,
        );
    }
}

/// Two-beam phase difference for a parallel film at radial incidence angle
/// `theta` (radians). The optical path difference is `2·n·d·cos(theta)`; the
/// extra half-wave shift on reflection is ignored in this idealization.
pub fn phase_difference(theta: f32, refr_index: f32, thickness: f32, wavelength: f32) -> f32 {
    4.0 * PI * refr_index * thickness * theta.cos() / wavelength
}

/// Intensity of two interfering beams of equal amplitude and no damping,
/// given their phase difference `delta`. Ranges over `[0, 2·intensity_max]`.
pub fn intensity(delta: f32, intensity_max: f32) -> f32 {
    intensity_max * (1.0 + delta.cos())
}
