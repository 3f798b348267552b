//! Indexed colour cube.

use vao_demos::demo::Cube;
use vao_demos::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run(Cube::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
