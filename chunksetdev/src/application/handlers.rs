use std::path::PathBuf;

use chunkset_core::error::{ChunksetError, Result};
use chunkset_core::{
    ChunkCodec, ChunkSize, DecodeOptions, DirAllocator, FsChunkCodec, NamePolicy,
    SuffixAllocator,
};

pub fn handle_encode(input: PathBuf, out: PathBuf, chunk_size: i64) -> Result<()> {
    // validate before the allocator touches the filesystem
    let chunk_size = ChunkSize::new(chunk_size)?;
    let dir = SuffixAllocator.allocate(&out)?;
    let header = FsChunkCodec.encode(&input, &dir, chunk_size)?;
    eprintln!(
        "encode: {} -> {} ({} chunks, {} bytes)",
        input.display(),
        dir.display(),
        header.total_chunks,
        header.file_size
    );
    Ok(())
}

pub fn handle_decode(input: PathBuf, out: Option<PathBuf>, strip_dirs: bool) -> Result<()> {
    let mut opts = DecodeOptions::from_env(out)?;
    if strip_dirs {
        opts.names = NamePolicy::Basename;
    }
    let path = FsChunkCodec.decode(&input, &opts)?;
    eprintln!("decode: {} -> {}", input.display(), path.display());
    Ok(())
}

pub fn handle_inspect(input: PathBuf, json: bool) -> Result<()> {
    let info = FsChunkCodec.inspect(&input)?;
    if json {
        let s = serde_json::to_string_pretty(&info)
            .map_err(|e| ChunksetError::Format(format!("json encode: {e}")))?;
        println!("{s}");
        return Ok(());
    }

    println!(
        "{}  {} bytes  {} chunks",
        info.file_name, info.file_size, info.total_chunks
    );
    for c in &info.chunks {
        println!("#{:<5} {:<20} {}", c.index, c.file_name, c.len);
    }
    for r in &info.missing {
        if r.first == r.last {
            println!("#{:<5} MISSING", r.first);
        } else {
            println!("#{}..#{} MISSING", r.first, r.last);
        }
    }
    if info.truncated {
        eprintln!("inspect: scan stopped early, chunk count in header looks corrupt");
    }
    if !info.is_complete() {
        eprintln!(
            "inspect: incomplete ({} missing, {} of {} bytes present)",
            info.missing_count(),
            info.present_bytes,
            info.file_size
        );
    }
    Ok(())
}
