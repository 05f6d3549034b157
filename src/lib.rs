//! Equal-inclination interference fringes of a thin parallel film.
//!
//! A plane-parallel film illuminated by monochromatic light produces
//! concentric circular fringes, one ring per locus of constant incidence
//! angle. This crate evaluates the two-beam intensity law over a square
//! angular field of view and exposes it three ways: a headless binary that
//! writes the field to disk, a batch thickness sweep, and an interactive
//! explorer with sliders (feature `macroquad`).

pub mod grid;
pub mod output;
pub mod pattern;
pub mod result;
pub mod settings;
pub mod sweep;
#[cfg(feature = "macroquad")]
pub mod viewer;
