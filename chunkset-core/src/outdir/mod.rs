use crate::error::Result;
use std::path::{Path, PathBuf};

/// Hands out a fresh output directory for an encode run.
pub trait DirAllocator {
    /// Create and return an unused directory derived from `desired`.
    fn allocate(&self, desired: &Path) -> Result<PathBuf>;
}

pub mod suffix;
