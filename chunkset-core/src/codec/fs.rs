use super::ChunkCodec;
use crate::container::header::Header;
use crate::domain::ChunkSetInfo;
use crate::error::Result;
use crate::pack::writer::{self, ChunkSize};
use crate::read::inspect;
use crate::read::reassemble::{self, DecodeOptions};
use std::path::{Path, PathBuf};

/// Chunk sets stored as plain files in a directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsChunkCodec;

impl ChunkCodec for FsChunkCodec {
    fn encode(&self, input: &Path, out_dir: &Path, chunk_size: ChunkSize) -> Result<Header> {
        writer::encode(input, out_dir, chunk_size)
    }

    fn decode(&self, input_dir: &Path, opts: &DecodeOptions) -> Result<PathBuf> {
        reassemble::decode(input_dir, opts)
    }

    fn inspect(&self, dir: &Path) -> Result<ChunkSetInfo> {
        inspect::inspect(dir)
    }
}
