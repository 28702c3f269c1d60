use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::emit::{write_c_array, CArrayLayout};
use crate::error::ConvertError;
use crate::raster::{decode_file, flatten, normalize};

/// What a successful [`process_image`] run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Dimensions of the decoded source image.
    pub source_width: u32,
    pub source_height: u32,
    /// Number of byte values written into the array.
    pub values: usize,
    pub output: PathBuf,
}

/// Decodes `input`, reduces it to a 96×96 greyscale buffer and writes it to
/// `output` as C source, overwriting any existing file.
///
/// The output file is only created once decoding has succeeded. A write
/// failure part-way through leaves whatever was already written in place.
pub fn process_image(input: &Path, output: &Path) -> Result<Summary, ConvertError> {
    process_image_with_layout(input, output, &CArrayLayout::default())
}

/// [`process_image`] with an explicit output layout.
pub fn process_image_with_layout(
    input: &Path,
    output: &Path,
    layout: &CArrayLayout,
) -> Result<Summary, ConvertError> {
    let img = decode_file(input)?;
    let data = flatten(&normalize(&img));

    if data.len() != layout.declared_size {
        return Err(ConvertError::LengthMismatch {
            expected: layout.declared_size,
            actual: data.len(),
        });
    }

    let write_err = |source| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_c_array(&mut writer, &data, layout).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!("wrote {} values to '{}'", data.len(), output.display());

    Ok(Summary {
        source_width: img.width(),
        source_height: img.height(),
        values: data.len(),
        output: output.to_path_buf(),
    })
}
