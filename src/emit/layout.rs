use crate::raster::TARGET_LEN;

/// Value written into the size constant of every fixture.
pub const TEST_IMAGE_DATA_SIZE: usize = 9216;

// The literal above must track the target resolution.
const _: () = assert!(TEST_IMAGE_DATA_SIZE == TARGET_LEN);

/// Names and formatting of the emitted C source.
///
/// # Fields
/// - `header`          — file named in the leading `#include`
/// - `size_symbol`     — `const unsigned int` holding the element count
/// - `data_symbol`     — the byte array itself
/// - `alignment`       — byte alignment in `__attribute__((aligned(N)))`
/// - `values_per_line` — hex literals per line of the array body
/// - `declared_size`   — value written into `size_symbol`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CArrayLayout {
    pub header: String,
    pub size_symbol: String,
    pub data_symbol: String,
    pub alignment: u32,
    pub values_per_line: usize,
    pub declared_size: usize,
}

impl Default for CArrayLayout {
    /// The layout the person-detection test harness links against.
    fn default() -> Self {
        CArrayLayout {
            header: "test_image_data.h".to_string(),
            size_symbol: "g_test_image_data_size".to_string(),
            data_symbol: "g_test_image_data".to_string(),
            alignment: 16,
            values_per_line: 12,
            declared_size: TEST_IMAGE_DATA_SIZE,
        }
    }
}
