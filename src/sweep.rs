//! Frame-by-frame thickness animation.
//!
//! A frame counter drives the film thickness through one full sinusoidal
//! period, confined to the interactive thickness bounds. The interactive
//! explorer steps frames on a timer; `Sweep` renders the whole period in a
//! batch, one field per frame, fanned out across the thread pool with a
//! progress bar.

use std::f32::consts::PI;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::settings::{Settings, THICKNESS_BOUNDS};
use crate::{output, pattern::Pattern, result::FringeField};

#[cfg(test)]
mod tests {

    use super::*;
    use crate::settings;

    #[test]
    fn schedule_is_periodic() {
        let frames = 30;
        assert!((thickness_at(0, frames) - thickness_at(frames, frames)).abs() < 1e-2);
    }

    #[test]
    fn schedule_stays_in_bounds() {
        let frames = 30;
        for frame in 0..=4 * frames {
            let thickness = thickness_at(frame, frames);
            assert!(thickness >= THICKNESS_BOUNDS.0 - 1e-3);
            assert!(thickness <= THICKNESS_BOUNDS.1 + 1e-3);
        }
    }

    #[test]
    fn solve_renders_one_field_per_frame() {
        let mut settings = settings::load_default_config().unwrap();
        settings.resolution = 51;
        settings.frames = 4;

        let mut sweep = Sweep::new(settings);
        sweep.solve();

        assert_eq!(sweep.fields.len(), 4);
        for (frame, field) in sweep.fields.iter().enumerate() {
            assert_eq!(field.resolution(), 51);
            let peak = 2.0 * sweep.pattern.settings.intensity_max;
            assert!(field.min() >= 0.0);
            assert!(field.max() <= peak + 1e-5, "frame {}", frame);
        }
    }
}

/// Thickness at `frame` of `frames`: a sinusoidal sweep over one full
/// period, spanning the interactive thickness bounds.
pub fn thickness_at(frame: usize, frames: usize) -> f32 {
    let (lo, hi) = THICKNESS_BOUNDS;
    let phase = 2.0 * PI * frame as f32 / frames as f32;
    lo + (hi - lo) * (0.5 + 0.5 * phase.sin())
}

/// A batch render of the thickness animation.
#[derive(Debug)]
pub struct Sweep {
    pub pattern: Pattern,
    pub frames: usize,
    pub fields: Vec<FringeField>,
}

impl Sweep {
    pub fn new(settings: Settings) -> Self {
        let frames = settings.frames;
        Self {
            pattern: Pattern::new(settings),
            frames,
            fields: Vec::new(),
        }
    }

    /// Renders every frame of the sweep. Frames are independent, so each
    /// gets its own copy of the pattern with the scheduled thickness.
    pub fn solve(&mut self) {
        let start = Instant::now();
        println!("Rendering thickness sweep...");

        let pb = ProgressBar::new(self.frames as u64);
        pb.set_style(
            ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {bar:40.green/blue} {pos:>5}/{len:5} {msg} ETA: {eta_precise}",
            )
            .unwrap()
            .progress_chars("█▇▆▅▄▃▂▁")
        );
        pb.set_message("frame".to_string());

        self.fields = (0..self.frames)
            .into_par_iter()
            .map(|frame| {
                let mut pattern = self.pattern.clone();
                pattern.settings.thickness = thickness_at(frame, self.frames);
                let field = pattern.compute();
                pb.inc(1);
                field
            })
            .collect();

        pb.finish_and_clear();

        let end = Instant::now();
        let duration = end.duration_since(start);
        let time_per_frame = duration / self.frames as u32;

        println!(
            "Time taken: {:.2?}, Time per frame: {:.2?}",
            duration, time_per_frame
        );
    }

    pub fn writeup(&self) {
        for (frame, field) in self.fields.iter().enumerate() {
            let suffix = format!("_{:03}", frame);
            let _ = output::write_field(field, &suffix, &self.pattern.settings.directory);
        }
        let _ = output::write_settings(&self.pattern.settings, &self.pattern.settings.directory);
        let _ = output::write_summary(
            &self.pattern.settings,
            &self.fields,
            &self.pattern.settings.directory,
        );
    }
}
