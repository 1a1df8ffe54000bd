use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRow {
    pub index: u32,
    pub file_name: String,
    pub len: u64,
}

/// Inclusive run of absent chunk indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRange {
    pub first: u32,
    pub last: u32,
}

impl MissingRange {
    pub fn count(&self) -> u64 {
        (self.last - self.first) as u64 + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSetInfo {
    pub file_name: String,
    pub file_size: i64,
    pub total_chunks: i32,
    /// Chunk files found on disk, in index order
    pub chunks: Vec<ChunkRow>,
    /// Sum of the lengths of the chunk files that exist
    pub present_bytes: u64,
    pub missing: Vec<MissingRange>,
    /// Scanning stopped early; everything after the last range start was assumed absent
    pub truncated: bool,
}

impl ChunkSetInfo {
    pub fn missing_count(&self) -> u64 {
        self.missing.iter().map(MissingRange::count).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.present_bytes == self.file_size as u64
    }
}
