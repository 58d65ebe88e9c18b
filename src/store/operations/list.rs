use futures::TryStreamExt;
use opendal::{EntryMode, ErrorKind, Operator};

use crate::error::Result;

/// Trait for listing files in the outputs directory.
pub trait Lister {
    /// Names of regular files directly under the root, non-recursive.
    /// Subdirectories are skipped; order is whatever the backend yields.
    async fn list_files(&self) -> Result<Vec<String>>;
}

pub struct OpenDalLister {
    operator: Operator,
}

impl OpenDalLister {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Lister for OpenDalLister {
    async fn list_files(&self) -> Result<Vec<String>> {
        let mut lister = match self.operator.lister("/").await {
            Ok(lister) => lister,
            // Missing root means nothing has been created yet.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        loop {
            match lister.try_next().await {
                Ok(Some(entry)) => {
                    if entry.metadata().mode() == EntryMode::FILE {
                        files.push(entry.name().to_string());
                    }
                }
                Ok(None) => break,
                // Some backends only notice a missing root on the first poll.
                Err(e) if e.kind() == ErrorKind::NotFound => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(files)
    }
}
