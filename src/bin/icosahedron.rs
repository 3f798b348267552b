//! Indexed icosahedron with one colour per vertex.

use vao_demos::demo::Icosahedron;
use vao_demos::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run(Icosahedron::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
