use haidinger::pattern::Pattern;
use haidinger::settings::{self};
use haidinger::sweep::Sweep;

fn main() {
    let settings = settings::load_config().unwrap();

    if settings.animate {
        let mut sweep = Sweep::new(settings);
        sweep.solve();
        sweep.writeup();
    } else {
        let pattern = Pattern::new(settings);
        let field = pattern.compute();
        println!("{}", field);
        pattern.writeup(&field);
    }
}
