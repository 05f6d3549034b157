//! Interactive exploration of the fringe pattern.
//!
//! The window shows the intensity field as a grayscale texture with a
//! colorbar, and a control panel of sliders for the four interactive
//! parameters plus a reset button and an animation toggle. All widget
//! plumbing belongs to macroquad; this module only mirrors slider values
//! into the pattern, recomputes when something changed, and pushes the new
//! field into the texture.

use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui};

use crate::pattern::{Param, Pattern};
use crate::result::FringeField;
use crate::settings::{
    ANGLE_RANGE_BOUNDS, REFR_INDEX_BOUNDS, THICKNESS_BOUNDS, WAVELENGTH_BOUNDS,
};
use crate::sweep;

const MARGIN: f32 = 50.0; // screen margin around the field, px
const PANEL_WIDTH: f32 = 330.0;
const PANEL_HEIGHT: f32 = 220.0;
const COLORBAR_WIDTH: f32 = 18.0;
const FRAME_INTERVAL: f32 = 0.1; // thickness animation cadence, seconds

/// Runs the explorer until the window is closed.
pub async fn run(mut pattern: Pattern) {
    // Fringe maxima sit at twice the amplitude factor; pinning the grayscale
    // to that ceiling keeps brightness stable while the film is swept.
    let peak = 2.0 * pattern.settings.intensity_max;
    let frames = pattern.settings.frames;

    let mut field = pattern.compute();
    let mut image = field_to_image(&field, peak);
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);

    let mut animate = false;
    let mut frame = 0;
    let mut timer = 0.0;

    loop {
        clear_background(BLACK);
        let mut dirty = false;

        if is_key_pressed(KeyCode::Space) {
            animate = !animate;
        }
        if is_key_pressed(KeyCode::R) {
            pattern.reset();
            dirty = true;
        }

        let mut wavelength = pattern.settings.wavelength;
        let mut refr_index = pattern.settings.refr_index;
        let mut thickness = pattern.settings.thickness;
        let mut angle_range = pattern.settings.angle_range;
        let mut reset_clicked = false;

        root_ui().window(
            hash!(),
            vec2(screen_width() - PANEL_WIDTH - 10.0, 10.0),
            vec2(PANEL_WIDTH, PANEL_HEIGHT),
            |ui| {
                ui.slider(
                    hash!(),
                    "wavelength (nm)",
                    WAVELENGTH_BOUNDS.0..WAVELENGTH_BOUNDS.1,
                    &mut wavelength,
                );
                ui.slider(
                    hash!(),
                    "thickness (nm)",
                    THICKNESS_BOUNDS.0..THICKNESS_BOUNDS.1,
                    &mut thickness,
                );
                ui.slider(
                    hash!(),
                    "refr. index",
                    REFR_INDEX_BOUNDS.0..REFR_INDEX_BOUNDS.1,
                    &mut refr_index,
                );
                ui.slider(
                    hash!(),
                    "rad (deg)",
                    ANGLE_RANGE_BOUNDS.0..ANGLE_RANGE_BOUNDS.1,
                    &mut angle_range,
                );
                ui.checkbox(hash!(), "animate (space)", &mut animate);
                if ui.button(None, "Reset (R)") {
                    reset_clicked = true;
                }
            },
        );

        if reset_clicked {
            pattern.reset();
            dirty = true;
        } else {
            if wavelength != pattern.settings.wavelength {
                pattern.set(Param::Wavelength, wavelength);
                dirty = true;
            }
            if thickness != pattern.settings.thickness {
                pattern.set(Param::Thickness, thickness);
                dirty = true;
            }
            if refr_index != pattern.settings.refr_index {
                pattern.set(Param::RefrIndex, refr_index);
                dirty = true;
            }
            if angle_range != pattern.settings.angle_range {
                pattern.set(Param::AngleRange, angle_range);
                dirty = true;
            }
        }

        if animate {
            timer += get_frame_time();
            if timer >= FRAME_INTERVAL {
                timer -= FRAME_INTERVAL;
                frame = (frame + 1) % frames;
                pattern.set(Param::Thickness, sweep::thickness_at(frame, frames));
                dirty = true;
            }
        }

        if dirty {
            field = pattern.compute();
            image = field_to_image(&field, peak);
            texture.update(&image);
        }

        let size = (screen_height() - 2.0 * MARGIN)
            .min(screen_width() - PANEL_WIDTH - 3.0 * MARGIN - COLORBAR_WIDTH);
        draw_field(&texture, &field, MARGIN, MARGIN, size);
        draw_colorbar(MARGIN + size + 20.0, MARGIN, size, peak);

        next_frame().await
    }
}

/// Maps the intensity field onto a grayscale image, white at `peak`.
pub fn field_to_image(field: &FringeField, peak: f32) -> Image {
    let res = field.resolution();
    let mut image = Image::gen_image_color(res as u16, res as u16, BLACK);

    for ((row, col), value) in field.intensity.indexed_iter() {
        let level = ((value / peak).clamp(0.0, 1.0) * 255.0) as u8;
        image.set_pixel(
            col as u32,
            row as u32,
            Color::from_rgba(level, level, level, 255),
        );
    }

    image
}

/// Draws the field texture with its angular extent ticks and axis captions.
fn draw_field(texture: &Texture2D, field: &FringeField, x: f32, y: f32, size: f32) {
    draw_texture_ex(
        texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(size, size)),
            ..Default::default()
        },
    );

    let [x_min, x_max, y_min, y_max] = field.extent;
    draw_text(&format!("{:.0}", x_min), x, y + size + 16.0, 16.0, LIGHTGRAY);
    draw_text(
        &format!("{:.0}", x_max),
        x + size - 20.0,
        y + size + 16.0,
        16.0,
        LIGHTGRAY,
    );
    draw_text(&format!("{:.0}", y_max), x - 30.0, y + 12.0, 16.0, LIGHTGRAY);
    draw_text(&format!("{:.0}", y_min), x - 30.0, y + size, 16.0, LIGHTGRAY);
    draw_text(
        "rad X (deg)",
        x + size / 2.0 - 40.0,
        y + size + 32.0,
        16.0,
        LIGHTGRAY,
    );
    draw_text("rad Y (deg)", x - 30.0, y - 14.0, 16.0, LIGHTGRAY);
}

/// Vertical grayscale reference strip next to the field.
fn draw_colorbar(x: f32, y: f32, height: f32, peak: f32) {
    let steps = height as i32;
    for i in 0..steps {
        let level = (255.0 * (1.0 - i as f32 / height)) as u8;
        draw_line(
            x,
            y + i as f32,
            x + COLORBAR_WIDTH,
            y + i as f32,
            1.0,
            Color::from_rgba(level, level, level, 255),
        );
    }

    draw_text(&format!("{:.1}", peak), x, y - 8.0, 16.0, LIGHTGRAY);
    draw_text("0.0", x, y + height + 14.0, 16.0, LIGHTGRAY);
    draw_text("I", x + COLORBAR_WIDTH + 6.0, y + height / 2.0, 16.0, LIGHTGRAY);
}
