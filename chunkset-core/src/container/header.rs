use crate::error::{ChunksetError, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub const HEADER_FILE: &str = "header.hdr";
/// `total_chunks` (i32) + `file_size` (i64); the name fills the rest of the file.
pub const HEADER_PREFIX_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub total_chunks: i32,
    /// Original file size in bytes
    pub file_size: i64,
    /// Base name of the original file, no length prefix on disk
    pub file_name: String,
}

impl Header {
    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        w.write_all(&self.total_chunks.to_le_bytes())?;
        w.write_all(&self.file_size.to_le_bytes())?;
        w.write_all(self.file_name.as_bytes())?;
        Ok(())
    }

    pub fn read_from(mut r: impl Read) -> Result<Self> {
        let mut raw = Vec::new();
        r.read_to_end(&mut raw)?;
        Self::from_bytes(&raw)
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.len() < HEADER_PREFIX_LEN {
            return Err(ChunksetError::Format(format!(
                "header too short: got {} bytes, need at least {HEADER_PREFIX_LEN}",
                raw.len()
            )));
        }
        let (prefix, name) = raw.split_at(HEADER_PREFIX_LEN);
        let mut tc = [0u8; 4];
        tc.copy_from_slice(&prefix[..4]);
        let total_chunks = i32::from_le_bytes(tc);
        let mut fs = [0u8; 8];
        fs.copy_from_slice(&prefix[4..]);
        let file_size = i64::from_le_bytes(fs);

        if total_chunks < 0 {
            return Err(ChunksetError::Format(format!(
                "negative chunk count {total_chunks}"
            )));
        }
        if file_size < 0 {
            return Err(ChunksetError::Format(format!(
                "negative file size {file_size}"
            )));
        }
        let file_name = String::from_utf8(name.to_vec())
            .map_err(|e| ChunksetError::Format(format!("file name is not UTF-8: {e}")))?;
        if file_name.is_empty() {
            return Err(ChunksetError::Format("empty file name".into()));
        }

        Ok(Self {
            total_chunks,
            file_size,
            file_name,
        })
    }

    pub fn load(dir: &Path) -> Result<Self> {
        let f = File::open(dir.join(HEADER_FILE))?;
        Self::read_from(f)
    }

    pub fn store(&self, dir: &Path) -> Result<()> {
        let mut w = BufWriter::new(File::create(dir.join(HEADER_FILE))?);
        self.write_to(&mut w)?;
        w.flush()?;
        Ok(())
    }

    /// Number of chunks a file of `file_size` bytes splits into.
    pub fn expected_chunks(file_size: u64, chunk_size: u64) -> u64 {
        if chunk_size == 0 {
            return 0;
        }
        file_size.div_ceil(chunk_size)
    }
}
