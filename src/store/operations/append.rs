use opendal::{ErrorKind, Operator};

use crate::error::Result;

/// Trait for appending report blocks to a file in the outputs directory.
pub trait Appender {
    /// Append `text` to `name`, creating the file when it does not exist.
    /// Existing bytes stay unchanged; the result is a strict extension.
    async fn append(&self, name: &str, text: &str) -> Result<()>;
}

pub struct OpenDalAppender {
    operator: Operator,
}

impl OpenDalAppender {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Appender for OpenDalAppender {
    async fn append(&self, name: &str, text: &str) -> Result<()> {
        // Merge existing + new; this process is the only writer.
        let mut merged = match self.operator.read(name).await {
            Ok(buf) => buf.to_vec(),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        merged.extend_from_slice(text.as_bytes());
        self.operator.write(name, merged).await?;
        Ok(())
    }
}
