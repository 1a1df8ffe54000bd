use std::path::{Path, PathBuf};

pub const CHUNK_PREFIX: &str = "part_";
pub const CHUNK_EXT: &str = "chunk";

/// File name of the chunk at 1-based `index`.
pub fn chunk_file_name(index: u32) -> String {
    format!("{CHUNK_PREFIX}{index}.{CHUNK_EXT}")
}

pub fn chunk_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(chunk_file_name(index))
}

/// Index of a chunk file name exactly as `chunk_file_name` spells it.
pub fn chunk_index(name: &str) -> Option<u32> {
    let digits = name
        .strip_prefix(CHUNK_PREFIX)?
        .strip_suffix(CHUNK_EXT)?
        .strip_suffix('.')?;
    let index: u32 = digits.parse().ok()?;
    (index >= 1 && chunk_file_name(index) == name).then_some(index)
}
