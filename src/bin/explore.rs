use haidinger::pattern::Pattern;
use haidinger::settings::{self};
use haidinger::viewer;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Equal-inclination fringes".to_string(),
        window_width: 960,
        window_height: 640,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = settings::load_config().unwrap();
    let pattern = Pattern::new(settings);

    viewer::run(pattern).await;
}
