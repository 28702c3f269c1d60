// Thin CLI over the library: argument parsing, logging setup and the
// confirmation message. All conversion logic lives in src/lib.rs.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use jpeg_to_carray::process_image;

/// Convert a JPEG image to greyscale, resize it to 96x96, and save it as a C array.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input JPEG file path
    input_file: PathBuf,

    /// Output C file path to save the array
    output_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("{:?}", args);

    let summary = process_image(&args.input_file, &args.output_file)?;
    debug!(
        "source {}x{}, {} values",
        summary.source_width, summary.source_height, summary.values
    );

    println!(
        "The image has been processed and saved in '{}'.",
        summary.output.display()
    );
    Ok(())
}
