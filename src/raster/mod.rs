pub mod decode;
pub mod normalize;
pub mod flatten;

pub use decode::{decode_bytes, decode_file};
pub use normalize::{normalize, resize_to_target, to_greyscale, TARGET_HEIGHT, TARGET_LEN, TARGET_WIDTH};
pub use flatten::flatten;
