use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a conversion.
///
/// Input errors (`ReadInput`, `Decode`) happen before the output file is
/// touched. `WriteOutput` may leave a partially written file behind.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot read input file '{}'", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode image '{}'", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write output file '{}'", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("flattened buffer holds {actual} values, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl ConvertError {
    /// True when the failure came from the input file (missing, unreadable
    /// or not decodable).
    pub fn is_input_error(&self) -> bool {
        matches!(self, ConvertError::ReadInput { .. } | ConvertError::Decode { .. })
    }
}
