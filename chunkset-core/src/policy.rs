use crate::error::{ChunksetError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// How decode treats the file name stored in a header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamePolicy {
    /// Refuse names that would leave the output directory.
    #[default]
    Reject,
    /// Keep only the final path component of the stored name.
    Basename,
}

impl NamePolicy {
    /// Resolve a stored name to a single safe file name.
    pub fn resolve<'a>(&self, stored: &'a str) -> Result<&'a str> {
        match self {
            NamePolicy::Reject => {
                if is_plain_name(stored) {
                    Ok(stored)
                } else {
                    Err(ChunksetError::UnsafeName(stored.to_string()))
                }
            }
            NamePolicy::Basename => {
                let last = stored
                    .rsplit(['/', '\\'])
                    .next()
                    .unwrap_or_default();
                if is_plain_name(last) {
                    Ok(last)
                } else {
                    Err(ChunksetError::UnsafeName(stored.to_string()))
                }
            }
        }
    }
}

fn is_plain_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return false;
    }
    let mut comps = Path::new(name).components();
    matches!(
        (comps.next(), comps.next()),
        (Some(Component::Normal(_)), None)
    )
}
