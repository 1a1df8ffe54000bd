use crate::container::header::Header;
use crate::domain::ChunkSetInfo;
use crate::error::Result;
use crate::pack::writer::ChunkSize;
use crate::read::reassemble::DecodeOptions;
use std::path::{Path, PathBuf};

/// Split/rebuild capability, independent of how output directories are chosen.
pub trait ChunkCodec {
    fn encode(&self, input: &Path, out_dir: &Path, chunk_size: ChunkSize) -> Result<Header>;

    fn decode(&self, input_dir: &Path, opts: &DecodeOptions) -> Result<PathBuf>;

    fn inspect(&self, dir: &Path) -> Result<ChunkSetInfo>;
}

pub mod fs;
