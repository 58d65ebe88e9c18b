use std::path::Path;

use opendal::Operator;

use crate::config::Settings;
use crate::error::Result;

mod operations;

use self::operations::append::OpenDalAppender;
use self::operations::create::OpenDalCreator;
use self::operations::delete::OpenDalDeleter;
use self::operations::list::OpenDalLister;
use self::operations::{Appender, Creator, Deleter, Lister};

/// File store accessor over the outputs directory, backed by OpenDAL's
/// filesystem service.
#[derive(Clone)]
pub struct StoreClient {
    operator: Operator,
}

impl StoreClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let operator = Self::build_operator(&settings.output_dir)?;
        Ok(Self { operator })
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    fn build_operator(root: &Path) -> Result<Operator> {
        let builder = opendal::services::Fs::default().root(&root.to_string_lossy());
        Ok(Operator::new(builder)?.finish())
    }

    /// Create the outputs directory if it is missing. No-op when present.
    pub async fn ensure_root(&self) -> Result<()> {
        self.operator.create_dir("/").await?;
        Ok(())
    }

    /// Names of the regular files directly under the outputs directory.
    pub async fn list_files(&self) -> Result<Vec<String>> {
        OpenDalLister::new(self.operator.clone()).list_files().await
    }

    /// Create an empty file; fails when the name is already taken.
    pub async fn create_file(&self, name: &str) -> Result<()> {
        OpenDalCreator::new(self.operator.clone()).create(name).await
    }

    /// Remove one file from the outputs directory.
    pub async fn delete_file(&self, name: &str) -> Result<()> {
        OpenDalDeleter::new(self.operator.clone()).delete(name).await
    }

    /// Append a block of text to a file under the outputs directory,
    /// creating it when absent.
    pub async fn append_block(&self, name: &str, text: &str) -> Result<()> {
        OpenDalAppender::new(self.operator.clone())
            .append(name, text)
            .await
    }
}
