//! Random line cloud, regenerated every frame. The title shows the point count.

use vao_demos::demo::PointCloud;
use vao_demos::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run(PointCloud::new()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
