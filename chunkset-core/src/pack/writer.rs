use crate::container::chunkfile::chunk_path;
use crate::container::header::Header;
use crate::error::{ChunksetError, Result};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Positive chunk length in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkSize(usize);

impl ChunkSize {
    pub fn new(bytes: i64) -> Result<Self> {
        if bytes <= 0 {
            return Err(ChunksetError::InvalidChunkSize(bytes));
        }
        let n = usize::try_from(bytes).map_err(|_| ChunksetError::InvalidChunkSize(bytes))?;
        Ok(Self(n))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for ChunkSize {
    type Error = ChunksetError;

    fn try_from(bytes: i64) -> Result<Self> {
        Self::new(bytes)
    }
}

/// Read the next chunk of at most `limit` bytes into `buf`.
///
/// `buf` grows with the data actually read, never to `limit` up front.
fn next_chunk(r: &mut impl Read, limit: u64, buf: &mut Vec<u8>) -> std::io::Result<usize> {
    buf.clear();
    r.by_ref().take(limit).read_to_end(buf)
}

/// Split `input` into `part_<N>.chunk` files plus `header.hdr` inside `out_dir`.
///
/// `out_dir` must already exist. Colliding files in it are overwritten.
pub fn encode(input: &Path, out_dir: &Path, chunk_size: ChunkSize) -> Result<Header> {
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ChunksetError::Format(format!(
                "input has no UTF-8 file name: {}",
                input.display()
            ))
        })?
        .to_string();

    let mut src = File::open(input)?;
    let limit = chunk_size.get() as u64;
    let mut buf = Vec::new();
    let mut index: u32 = 1;

    loop {
        let n = next_chunk(&mut src, limit, &mut buf)?;
        if n == 0 {
            break;
        }
        if index > i32::MAX as u32 {
            return Err(ChunksetError::Format(
                "chunk count does not fit the header (i32)".into(),
            ));
        }
        let path = chunk_path(out_dir, index);
        let mut out = File::create(&path)?;
        out.write_all(&buf)?;
        tracing::debug!(index, len = n, "wrote chunk");
        index += 1;
    }

    let total_chunks = (index - 1) as i32;
    let file_size = i64::try_from(fs::metadata(input)?.len())
        .map_err(|_| ChunksetError::Format("file size does not fit the header (i64)".into()))?;

    let header = Header {
        total_chunks,
        file_size,
        file_name,
    };
    header.store(out_dir)?;

    tracing::info!(
        chunks = header.total_chunks,
        bytes = header.file_size,
        out = %out_dir.display(),
        "encoded {}",
        header.file_name
    );
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::header::HEADER_FILE;

    #[test]
    fn chunk_size_must_be_positive() {
        assert!(matches!(
            ChunkSize::new(0),
            Err(ChunksetError::InvalidChunkSize(0))
        ));
        assert!(matches!(
            ChunkSize::new(-4),
            Err(ChunksetError::InvalidChunkSize(-4))
        ));
        assert_eq!(ChunkSize::try_from(4i64).unwrap().get(), 4);
    }

    /// Hands out one byte per read call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn short_reads_still_fill_whole_chunks() {
        let mut r = Trickle(b"abcdefg");
        let mut buf = Vec::new();
        assert_eq!(next_chunk(&mut r, 4, &mut buf).unwrap(), 4);
        assert_eq!(buf, b"abcd");
        assert_eq!(next_chunk(&mut r, 4, &mut buf).unwrap(), 3);
        assert_eq!(buf, b"efg");
        assert_eq!(next_chunk(&mut r, 4, &mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn hello_world_in_fours() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("greeting.txt");
        fs::write(&input, b"HELLOWORLD").unwrap();
        let out = tmp.path().join("set");
        fs::create_dir(&out).unwrap();

        let h = encode(&input, &out, ChunkSize::new(4).unwrap()).unwrap();
        assert_eq!(h.total_chunks, 3);
        assert_eq!(h.file_size, 10);
        assert_eq!(h.file_name, "greeting.txt");

        assert_eq!(fs::read(out.join("part_1.chunk")).unwrap(), b"HELL");
        assert_eq!(fs::read(out.join("part_2.chunk")).unwrap(), b"OWOR");
        assert_eq!(fs::read(out.join("part_3.chunk")).unwrap(), b"LD");
        assert!(!out.join("part_4.chunk").exists());
        assert_eq!(Header::load(&out).unwrap(), h);
    }

    #[test]
    fn huge_chunk_size_only_buffers_the_input() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("tiny.txt");
        fs::write(&input, b"hi").unwrap();
        let out = tmp.path().join("set");
        fs::create_dir(&out).unwrap();

        let h = encode(&input, &out, ChunkSize::new(1i64 << 50).unwrap()).unwrap();
        assert_eq!(h.total_chunks, 1);
        assert_eq!(h.file_size, 2);
        assert_eq!(fs::read(out.join("part_1.chunk")).unwrap(), b"hi");
        assert!(!out.join("part_2.chunk").exists());
    }

    #[test]
    fn empty_input_writes_header_only() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("empty.bin");
        fs::write(&input, b"").unwrap();
        let out = tmp.path().join("set");
        fs::create_dir(&out).unwrap();

        let h = encode(&input, &out, ChunkSize::new(16).unwrap()).unwrap();
        assert_eq!(h.total_chunks, 0);
        assert_eq!(h.file_size, 0);
        let names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(HEADER_FILE)]);
    }

    #[test]
    fn missing_input_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = encode(
            &tmp.path().join("nope"),
            tmp.path(),
            ChunkSize::new(4).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ChunksetError::Io(_)));
    }
}
