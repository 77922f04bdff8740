//! File-backed resume store, one text file per user

use crate::error::{Result, AtsMatcherError};
use crate::store::{normalize_user, ResumeStore};
use async_trait::async_trait;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct FileResumeStore {
    dir: PathBuf,
}

impl FileResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn resume_path(&self, user: &str) -> Result<PathBuf> {
        let normalized = normalize_user(user)?;
        Ok(self.dir.join(format!("{}_resume.txt", normalized)))
    }
}

#[async_trait]
impl ResumeStore for FileResumeStore {
    async fn save(&self, user: &str, text: &str) -> Result<()> {
        let path = self.resume_path(user)?;
        let dir = self.dir.clone();
        let text = text.to_string();
        let persist_path = path.clone();

        // Write to a uniquely named temp file in the same directory and
        // rename over the target, so a concurrent load only ever sees a
        // complete previous or current value.
        tokio::task::spawn_blocking(move || -> Result<()> {
            std::fs::create_dir_all(&dir)?;
            let mut tmp = NamedTempFile::new_in(&dir)
                .map_err(|e| AtsMatcherError::Persistence(format!("Failed to create temp file: {}", e)))?;
            tmp.write_all(text.as_bytes())
                .map_err(|e| AtsMatcherError::Persistence(format!("Failed to write resume: {}", e)))?;
            tmp.persist(&persist_path)
                .map_err(|e| AtsMatcherError::Persistence(format!("Failed to persist resume: {}", e)))?;
            Ok(())
        })
        .await
        .map_err(|e| AtsMatcherError::Persistence(format!("Save task failed: {}", e)))??;

        debug!("Saved resume for user at {}", path.display());
        Ok(())
    }

    async fn load(&self, user: &str) -> Result<Option<String>> {
        let path = self.resume_path(user)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AtsMatcherError::Persistence(format!(
                "Failed to read stored resume {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
