use crate::container::chunkfile::{chunk_file_name, chunk_path};
use crate::container::header::Header;
use crate::domain::{ChunkRow, ChunkSetInfo, MissingRange};
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Consecutive absent chunks after which the rest of the set is assumed absent.
pub const MAX_MISSING_RUN: u32 = 1024;

/// Summarize a chunk set: header fields plus which chunk files are present.
///
/// The chunk count comes from disk and may be garbage, so absent chunks are
/// kept as ranges and a long absent run ends the scan.
pub fn inspect(dir: &Path) -> Result<ChunkSetInfo> {
    let header = Header::load(dir)?;
    let total = header.total_chunks as u32;
    let mut chunks = Vec::new();
    let mut missing: Vec<MissingRange> = Vec::new();
    let mut present_bytes = 0u64;
    let mut truncated = false;

    for index in 1..=total {
        match fs::metadata(chunk_path(dir, index)) {
            Ok(md) => {
                present_bytes += md.len();
                chunks.push(ChunkRow {
                    index,
                    file_name: chunk_file_name(index),
                    len: md.len(),
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => match missing.last_mut() {
                Some(r) if r.last + 1 == index => {
                    r.last = index;
                    if r.count() >= MAX_MISSING_RUN as u64 && index < total {
                        r.last = total;
                        truncated = true;
                        break;
                    }
                }
                _ => missing.push(MissingRange {
                    first: index,
                    last: index,
                }),
            },
            Err(e) => return Err(e.into()),
        }
    }

    if truncated {
        tracing::warn!(
            total = header.total_chunks,
            "stopped scanning after {MAX_MISSING_RUN} consecutive missing chunks"
        );
    }

    Ok(ChunkSetInfo {
        file_name: header.file_name,
        file_size: header.file_size,
        total_chunks: header.total_chunks,
        chunks,
        present_bytes,
        missing,
        truncated,
    })
}
