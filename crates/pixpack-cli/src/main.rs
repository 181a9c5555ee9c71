//! convert_image - dump a bitmap as raw fixed-width packed pixels.
//!
//! Usage: `convert_image <input_image> <output_file> <format>`
//!
//! Bad arguments (wrong count, unrecognized format) exit with status 1
//! before any file is touched. A failed conversion prints its error and
//! still exits 0, matching the reference tool this replaces; scripts that
//! depend on that behavior parse the output text instead of the status.

mod args;

use clap::Parser;

use args::Args;
use pixpack_core::convert_file;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage and format errors are the one case that raises the exit
            // code. No output file exists yet at this point.
            err.print().ok();
            std::process::exit(1);
        }
    };

    let format = args.format.to_pixel_format();
    match convert_file(&args.input_image, &args.output_file, format) {
        Ok(()) => {
            println!(
                "Conversion to {} complete. File saved to: {}",
                format,
                args.output_file.display()
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
        }
    }
}
