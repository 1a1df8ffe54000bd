use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunksetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    /// A chunk the header promises is not on disk.
    #[error("missing chunk {index}: {}", .path.display())]
    MissingChunk { index: u32, path: PathBuf },

    #[error("invalid chunk size {0}: must be a positive number of bytes")]
    InvalidChunkSize(i64),

    /// Decode target is one of the files it reads from.
    #[error("output would overwrite chunk set file: {}", .0.display())]
    OverwritesInput(PathBuf),

    #[error("unsafe file name in header: {0:?}")]
    UnsafeName(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ChunksetError>;
