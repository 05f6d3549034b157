use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Result;
use chrono::Local;
use itertools::iproduct;

use crate::{grid, result::FringeField, settings::Settings};

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::Array2;

    #[test]
    fn field_file_has_one_line_per_grid_point() {
        let dir = std::env::temp_dir().join("haidinger_output_test");
        let field = FringeField::new(Array2::from_elem((5, 5), 1.0), 10.0);
        write_field(&field, "_test", dir.to_str().unwrap()).unwrap();

        let contents = fs::read_to_string(dir.join("fringe_field_test")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 25);

        // Each line is "x y intensity"; the first grid point is the corner
        let first: Vec<f32> = lines[0]
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(first, vec![-10.0, -10.0, 1.0]);
    }
}

/// Write the intensity field to a text file against the angular grid, one
/// `x y intensity` line per grid point.
pub fn write_field(field: &FringeField, suffix: &str, directory: &str) -> Result<()> {
    let dir = Path::new(directory);
    fs::create_dir_all(dir)?;

    let file = File::create(dir.join(format!("fringe_field{}", suffix)))?;
    let mut writer = BufWriter::new(file);

    let axis = grid::angle_axis(field.extent[1], field.resolution()).to_vec();
    for ((y, x), value) in iproduct!(axis.iter(), axis.iter()).zip(field.intensity.iter()) {
        writeln!(writer, "{} {} {}", x, y, value)?;
    }

    Ok(())
}

/// Dump the resolved settings next to the field files.
pub fn write_settings(settings: &Settings, directory: &str) -> Result<()> {
    let dir = Path::new(directory);
    fs::create_dir_all(dir)?;

    let contents = toml::to_string_pretty(settings)?;
    fs::write(dir.join("settings.toml"), contents)?;

    Ok(())
}

/// Write a run summary with the resolved settings and intensity statistics
/// across all rendered fields.
pub fn write_summary(settings: &Settings, fields: &[FringeField], directory: &str) -> Result<()> {
    let dir = Path::new(directory);
    fs::create_dir_all(dir)?;

    let min = fields.iter().map(|f| f.min()).fold(f32::INFINITY, f32::min);
    let max = fields
        .iter()
        .map(|f| f.max())
        .fold(f32::NEG_INFINITY, f32::max);

    let summary = serde_json::json!({
        "timestamp": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "settings": settings,
        "fields": fields.len(),
        "intensity_min": min,
        "intensity_max": max,
    });

    let file = File::create(dir.join("summary.json"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &summary)?;

    Ok(())
}
