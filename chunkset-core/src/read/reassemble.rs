use crate::container::chunkfile::{chunk_index, chunk_path};
use crate::container::header::{HEADER_FILE, Header};
use crate::error::{ChunksetError, Result};
use crate::policy::NamePolicy;
use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Target directory; falls back to `cwd` when None.
    pub out_dir: Option<PathBuf>,
    pub cwd: PathBuf,
    pub names: NamePolicy,
}

impl DecodeOptions {
    pub fn new(out_dir: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self {
            out_dir,
            cwd,
            names: NamePolicy::default(),
        }
    }

    /// Options whose fallback directory is the process working directory.
    pub fn from_env(out_dir: Option<PathBuf>) -> Result<Self> {
        Ok(Self::new(out_dir, std::env::current_dir()?))
    }

    pub fn target_dir(&self) -> &Path {
        self.out_dir.as_deref().unwrap_or(&self.cwd)
    }
}

/// True when `name` in `target` is the header or a referenced chunk of `input_dir`.
fn targets_chunk_set(input_dir: &Path, target: &Path, name: &str, total: u32) -> Result<bool> {
    let reserved = name == HEADER_FILE || chunk_index(name).is_some_and(|i| i <= total);
    if !reserved {
        return Ok(false);
    }
    Ok(fs::canonicalize(input_dir)? == fs::canonicalize(target)?)
}

/// Rebuild the original file from the chunk set in `input_dir`.
///
/// Returns the path of the written file. A failure part-way leaves a
/// truncated output behind.
pub fn decode(input_dir: &Path, opts: &DecodeOptions) -> Result<PathBuf> {
    let header = Header::load(input_dir)?;
    let name = opts.names.resolve(&header.file_name)?;
    let target = opts.target_dir();
    let out_path = target.join(name);
    if targets_chunk_set(input_dir, target, name, header.total_chunks as u32)? {
        return Err(ChunksetError::OverwritesInput(out_path));
    }

    let mut out = BufWriter::new(File::create(&out_path)?);
    let mut written = 0u64;

    for index in 1..=header.total_chunks as u32 {
        let path = chunk_path(input_dir, index);
        let mut chunk = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ChunksetError::MissingChunk { index, path });
            }
            Err(e) => return Err(e.into()),
        };
        let n = io::copy(&mut chunk, &mut out)?;
        tracing::debug!(index, len = n, "appended chunk");
        written += n;
    }
    out.flush()?;

    if written != header.file_size as u64 {
        tracing::warn!(
            expected = header.file_size,
            got = written,
            "reassembled size differs from header"
        );
    }
    tracing::info!(
        chunks = header.total_chunks,
        bytes = written,
        "decoded {}",
        out_path.display()
    );
    Ok(out_path)
}
