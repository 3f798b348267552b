//! UV sphere strip under a lit checker.

use vao_demos::demo::Sphere;
use vao_demos::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run(Sphere::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
