//! The boid shape in flat white.
//!
//! Left-drag rotates, right-drag pans, horizontal scroll zooms. W/S switch
//! wireframe and solid, Space resets the view, Escape quits.

use vao_demos::demo::Boid;
use vao_demos::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run(Boid::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
