pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use chunkset_core::error::Result;
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encode {
            input_file,
            output_directory,
            chunk_size,
        } => handlers::handle_encode(input_file, output_directory, chunk_size),
        Commands::Decode {
            input_directory,
            output_directory,
            strip_dirs,
        } => handlers::handle_decode(input_directory, output_directory, strip_dirs),
        Commands::Inspect {
            input_directory,
            json,
        } => handlers::handle_inspect(input_directory, json),
    }
}
