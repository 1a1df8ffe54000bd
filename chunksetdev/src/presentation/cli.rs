use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Split files into numbered chunks and put them back together", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a file into chunks under a freshly allocated directory
    Encode {
        input_file: PathBuf,
        /// Base output path; `_1`, `_2`, ... is appended when it already exists
        output_directory: PathBuf,
        /// Chunk length in bytes
        #[arg(allow_negative_numbers = true)]
        chunk_size: i64,
    },

    /// Rebuild the original file from a chunk set
    Decode {
        input_directory: PathBuf,
        /// Existing directory to write into (defaults to the current directory)
        output_directory: Option<PathBuf>,
        /// Drop directory components from the stored file name instead of refusing it
        #[arg(long)]
        strip_dirs: bool,
    },

    /// Show the header and chunk files of a chunk set
    Inspect {
        input_directory: PathBuf,
        #[arg(long)]
        json: bool,
    },
}
