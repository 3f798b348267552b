//! The boid with face normals under a gold Phong material.

use vao_demos::demo::ShadedBoid;
use vao_demos::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run(ShadedBoid::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
