use opendal::{ErrorKind, Operator};

use crate::error::{Error, Result};

/// Trait for creating empty files in the outputs directory.
pub trait Creator {
    /// Create an empty file. Fails with [`Error::FileExists`] when the name
    /// is already taken; the existing file's contents are never touched.
    async fn create(&self, name: &str) -> Result<()>;
}

pub struct OpenDalCreator {
    operator: Operator,
}

impl OpenDalCreator {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Creator for OpenDalCreator {
    async fn create(&self, name: &str) -> Result<()> {
        match self.operator.stat(name).await {
            Ok(_) => Err(Error::FileExists {
                name: name.to_string(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let mut writer = self.operator.writer(name).await?;
                writer.close().await?;
                log::debug!("created empty file {name}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
