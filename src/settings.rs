use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Interactive wavelength bounds in nanometres (visible spectrum).
pub const WAVELENGTH_BOUNDS: (f32, f32) = (400.0, 800.0);
/// Interactive refractive index bounds.
pub const REFR_INDEX_BOUNDS: (f32, f32) = (1.0, 2.0);
/// Interactive film thickness bounds in nanometres. Also the range swept by
/// the thickness animation.
pub const THICKNESS_BOUNDS: (f32, f32) = (100.0, 5000.0);
/// Interactive bounds for the angular half-width of the field of view, degrees.
pub const ANGLE_RANGE_BOUNDS: (f32, f32) = (5.0, 60.0);

/// Runtime configuration for the simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub wavelength: f32,
    pub refr_index: f32,
    pub thickness: f32,
    pub angle_range: f32,
    #[serde(default = "default_intensity_max")]
    pub intensity_max: f32,
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    #[serde(default = "default_frames")]
    pub frames: usize,
    #[serde(default)]
    pub animate: bool,
    #[serde(default = "default_directory")]
    pub directory: String,
}

fn default_intensity_max() -> f32 {
    1.0
}

fn default_resolution() -> usize {
    500
}

fn default_frames() -> usize {
    30
}

fn default_directory() -> String {
    ".".to_string()
}

pub fn load_default_config() -> Result<Settings> {
    let project_dir = retrieve_project_root();
    let default_config_file = project_dir.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    validate_config(&config);

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    // Try to find the project directory in different ways
    let project_dir = retrieve_project_root();

    let default_config_file = project_dir.join("config/default.toml");
    let local_config = project_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        println!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        println!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("haidinger"))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let mut config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(wavelength) = args.w {
        config.wavelength = wavelength;
    }
    if let Some(refr_index) = args.ri {
        config.refr_index = refr_index;
    }
    if let Some(thickness) = args.d {
        config.thickness = thickness;
    }
    if let Some(angle_range) = args.rad {
        config.angle_range = angle_range;
    }
    if let Some(resolution) = args.res {
        config.resolution = resolution;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if args.animate {
        config.animate = true;
    }
    if let Some(directory) = args.dir {
        config.directory = directory;
    }

    validate_config(&config);

    println!("{:#?}", config);

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the HAIDINGER_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> std::path::PathBuf {
    let project_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        std::path::PathBuf::from(manifest_dir)
    } else if let Ok(path) = env::var("HAIDINGER_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        std::path::PathBuf::from(path)
    } else {
        // Fallback: try to find the nearest directory containing a "config" subdirectory
        // Start from the executable directory and walk upward
        let exe_path = env::current_exe().expect("Failed to get current executable path");
        let mut current_dir = exe_path
            .parent()
            .expect("Failed to get executable directory")
            .to_path_buf();
        let mut found = false;

        while !found && current_dir.parent().is_some() {
            if current_dir.join("config").is_dir() {
                found = true;
            } else {
                current_dir = current_dir.parent().unwrap().to_path_buf();
            }
        }

        if found {
            current_dir
        } else {
            panic!("Could not find project root directory");
        }
    };
    project_dir
}

fn validate_config(config: &Settings) {
    assert!(config.wavelength > 0.0, "Wavelength must be greater than 0");
    assert!(config.thickness > 0.0, "Thickness must be greater than 0");
    assert!(
        config.angle_range > 0.0,
        "Angle range must be greater than 0"
    );
    assert!(
        config.resolution > 1,
        "Resolution must be at least 2 samples per axis"
    );
    assert!(config.frames > 0, "Frame count must be greater than 0");
}

#[derive(Parser, Debug)]
#[command(version, about = "Equal-inclination fringes of a thin parallel film")]
pub struct CliArgs {
    /// Wavelength of the illumination in nanometres.
    #[arg(short, long)]
    w: Option<f32>,

    /// Refractive index of the film.
    #[arg(long)]
    ri: Option<f32>,

    /// Film thickness in nanometres.
    #[arg(short, long)]
    d: Option<f32>,

    /// Half-width of the simulated incidence-angle range in degrees.
    /// The field of view spans this range on both axes.
    #[arg(long)]
    rad: Option<f32>,

    /// Number of samples per axis of the intensity field.
    #[arg(long)]
    res: Option<usize>,

    /// Number of frames in one full period of the thickness sweep.
    #[arg(long)]
    frames: Option<usize>,

    /// Render the thickness sweep instead of a single field.
    #[arg(short, long)]
    animate: bool,

    /// Directory to write output files to.
    #[arg(long)]
    dir: Option<String>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Wavelength: {:.1} nm
  - Refractive Index: {:.3}
  - Thickness: {:.1} nm
  - Angle Range: {:.1} deg
  - Intensity Max: {:.3}
  - Resolution: {}
  - Frames: {}
  ",
            self.wavelength,
            self.refr_index,
            self.thickness,
            self.angle_range,
            self.intensity_max,
            self.resolution,
            self.frames,
        )
    }
}
