pub mod c_array;
pub mod layout;

pub use c_array::{render_c_array, write_c_array};
pub use layout::{CArrayLayout, TEST_IMAGE_DATA_SIZE};
