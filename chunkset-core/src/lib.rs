#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod policy;

pub mod outdir;
pub mod codec;

pub mod container {
    pub mod chunkfile;
    pub mod header;
}

pub mod pack {
    pub mod writer;
}

pub mod read {
    pub mod inspect;
    pub mod reassemble;
}

// Re-exports: stable API surface
pub use outdir::DirAllocator;
pub use outdir::suffix::SuffixAllocator;
pub use codec::ChunkCodec;
pub use codec::fs::FsChunkCodec;
pub use container::header::Header;
pub use pack::writer::{ChunkSize, encode};
pub use policy::NamePolicy;
pub use read::inspect::inspect;
pub use read::reassemble::{DecodeOptions, decode};
