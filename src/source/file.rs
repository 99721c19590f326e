//! Payloads from JSON files on disk
//!
//! `<data_dir>/<dataset path>.json`, e.g. `data/sukta/1/1.json`.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{CorpusSource, Dataset};
use crate::utils::error::FetchError;

/// Reads payloads from a local data directory
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds a dataset
    pub fn path_for(&self, dataset: &Dataset) -> PathBuf {
        self.root.join(format!("{}.json", dataset.path()))
    }
}

#[async_trait]
impl CorpusSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, dataset: &Dataset) -> Result<Value, FetchError> {
        let path = self.path_for(dataset);
        debug!(dataset = dataset.name(), path = %path.display(), "Reading payload");

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(FetchError::Io(e)),
        };

        Ok(serde_json::from_str(&content)?)
    }
}
