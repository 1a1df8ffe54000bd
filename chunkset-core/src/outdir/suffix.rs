use super::DirAllocator;
use crate::error::Result;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Probes `desired`, `desired_1`, `desired_2`, ... and creates the first free one.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuffixAllocator;

fn with_suffix(desired: &Path, n: u64) -> PathBuf {
    let mut s: OsString = desired.as_os_str().to_owned();
    s.push(format!("_{n}"));
    PathBuf::from(s)
}

impl DirAllocator for SuffixAllocator {
    fn allocate(&self, desired: &Path) -> Result<PathBuf> {
        if let Some(parent) = desired.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut n = 0u64;
        loop {
            let candidate = if n == 0 {
                desired.to_path_buf()
            } else {
                with_suffix(desired, n)
            };
            // exists() covers plain files too; create_dir catches a racing creator
            if !candidate.exists() {
                match fs::create_dir(&candidate) {
                    Ok(()) => {
                        tracing::debug!(path = %candidate.display(), "allocated output directory");
                        return Ok(candidate);
                    }
                    Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
                    Err(e) => return Err(e.into()),
                }
            }
            n += 1;
        }
    }
}
