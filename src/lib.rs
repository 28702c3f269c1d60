pub mod error;
pub mod raster;
pub mod emit;
pub mod pipeline;

// Convenience re-exports
pub use error::ConvertError;
pub use emit::{render_c_array, write_c_array, CArrayLayout, TEST_IMAGE_DATA_SIZE};
pub use pipeline::{process_image, process_image_with_layout, Summary};
pub use raster::{TARGET_HEIGHT, TARGET_LEN, TARGET_WIDTH};
