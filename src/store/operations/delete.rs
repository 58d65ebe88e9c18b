use opendal::Operator;

use crate::error::Result;

/// Trait for removing files from the outputs directory.
pub trait Deleter {
    async fn delete(&self, name: &str) -> Result<()>;
}

pub struct OpenDalDeleter {
    operator: Operator,
}

impl OpenDalDeleter {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Deleter for OpenDalDeleter {
    async fn delete(&self, name: &str) -> Result<()> {
        self.operator.delete(name).await?;
        log::debug!("deleted {name}");
        Ok(())
    }
}
