//! Per-user resume persistence
//! One stored resume per user, overwritten on each upload

pub mod file;
pub mod memory;

pub use file::FileResumeStore;
pub use memory::MemoryResumeStore;

use crate::error::{Result, AtsMatcherError};
use async_trait::async_trait;

/// Key-value text store keyed by normalized user id.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Overwrite the stored resume text for a user. Atomic from the
    /// caller's perspective: a concurrent load never sees a partial write.
    async fn save(&self, user: &str, text: &str) -> Result<()>;

    /// Load the stored resume text for a user, `None` when no prior save
    /// occurred. Never fails for a missing entry.
    async fn load(&self, user: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<S: ResumeStore + ?Sized> ResumeStore for std::sync::Arc<S> {
    async fn save(&self, user: &str, text: &str) -> Result<()> {
        (**self).save(user, text).await
    }

    async fn load(&self, user: &str) -> Result<Option<String>> {
        (**self).load(user).await
    }
}

/// Canonical case-insensitive storage key for a user id.
pub fn normalize_user(user: &str) -> Result<String> {
    let normalized = user.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(AtsMatcherError::InvalidInput("User id is empty".to_string()));
    }
    if normalized.contains(['/', '\\', '.']) {
        return Err(AtsMatcherError::InvalidInput(format!(
            "User id contains invalid characters: {}",
            user
        )));
    }
    Ok(normalized)
}
