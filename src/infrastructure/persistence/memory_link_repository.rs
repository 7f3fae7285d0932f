//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;

/// Process-local link storage guarded by a single lock.
///
/// Lookups and snapshots share a read guard; inserts and deletes take the
/// write guard. Nothing is persisted, so every link is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, String>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: Link) -> Result<(), LinkError> {
        let mut links = self.links.write().await;

        match links.entry(link.code) {
            Entry::Occupied(taken) => Err(LinkError::AlreadyExists(taken.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(link.target_url);
                Ok(())
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<String, LinkError> {
        self.links
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| LinkError::NotFound(code.to_string()))
    }

    async fn delete(&self, code: &str) -> Result<(), LinkError> {
        self.links
            .write()
            .await
            .remove(code)
            .map(|_| ())
            .ok_or_else(|| LinkError::NotFound(code.to_string()))
    }

    async fn list_all(&self) -> BTreeMap<String, String> {
        let links = self.links.read().await;
        links
            .iter()
            .map(|(code, url)| (code.clone(), url.clone()))
            .collect()
    }

    async fn count(&self) -> usize {
        self.links.read().await.len()
    }
}
