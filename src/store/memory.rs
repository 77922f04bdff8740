//! In-memory resume store for tests and single-process deployments

use crate::error::Result;
use crate::store::{normalize_user, ResumeStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryResumeStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn save(&self, user: &str, text: &str) -> Result<()> {
        let key = normalize_user(user)?;
        self.entries.write().unwrap().insert(key, text.to_string());
        Ok(())
    }

    async fn load(&self, user: &str) -> Result<Option<String>> {
        let key = normalize_user(user)?;
        Ok(self.entries.read().unwrap().get(&key).cloned())
    }
}
