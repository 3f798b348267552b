//! Icosahedron from split position and colour buffers, drawn three ways.
//!
//! Left/Right step the highlighted triangle, Space pauses the stepping.

use vao_demos::demo::MultiBuffer;
use vao_demos::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run(MultiBuffer::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
