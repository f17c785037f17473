//! 内存条目存储
//!
//! 以 `Vec` 保存条目，所有查找均为线性扫描。
//! 每个操作在一次加锁内完成"查找-修改"，因此并发请求之间不会交错。

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::models::{EntryPatch, KnowledgeEntry, NewEntry, seed_entries};
use crate::storage::repository::EntryRepository;

/// 内存条目仓储
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<Vec<KnowledgeEntry>>,
}

impl InMemoryEntryStore {
    /// 创建空仓储
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带示例数据的仓储
    pub fn seeded() -> Self {
        Self {
            entries: RwLock::new(seed_entries()),
        }
    }

    fn position(entries: &[KnowledgeEntry], id: &str) -> Option<usize> {
        entries.iter().position(|entry| entry.id == id)
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryStore {
    async fn list(&self) -> Result<Vec<KnowledgeEntry>> {
        Ok(self.entries.read().clone())
    }

    async fn get(&self, id: &str) -> Result<Option<KnowledgeEntry>> {
        let entries = self.entries.read();
        Ok(entries.iter().find(|entry| entry.id == id).cloned())
    }

    async fn create(&self, input: NewEntry) -> Result<KnowledgeEntry> {
        let entry = KnowledgeEntry::new(input);
        self.entries.write().push(entry.clone());
        debug!(entry_id = %entry.id, "entry stored");
        Ok(entry)
    }

    async fn update(&self, id: &str, patch: EntryPatch) -> Result<Option<KnowledgeEntry>> {
        let mut entries = self.entries.write();
        let Some(index) = Self::position(&entries, id) else {
            return Ok(None);
        };

        let entry = &mut entries[index];
        entry.apply(patch);
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut entries = self.entries.write();
        match Self::position(&entries, id) {
            Some(index) => {
                entries.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reset(&self) -> Result<()> {
        *self.entries.write() = seed_entries();
        debug!("entry store reset to seed data");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entries.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_store_lists_in_insertion_order() {
        let store = InMemoryEntryStore::seeded();
        let entries = store.list().await.unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let created = store.create(NewEntry::new("T", "D")).await.unwrap();
        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_list_returns_snapshot() {
        let store = InMemoryEntryStore::seeded();
        let mut snapshot = store.list().await.unwrap();
        snapshot.clear();
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let store = InMemoryEntryStore::seeded();
        let before = store.list().await.unwrap();

        let result = store.update("missing", EntryPatch::title("x")).await.unwrap();
        assert!(result.is_none());
        assert!(!store.delete("missing").await.unwrap());
        assert!(store.get("missing").await.unwrap().is_none());

        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_only() {
        let store = InMemoryEntryStore::seeded();
        let before = store.get("2").await.unwrap().unwrap();

        let after = store
            .update("2", EntryPatch::title("Recalibration"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(after.title, "Recalibration");
        assert_eq!(after.description, before.description);
        assert_eq!(after.image_url, before.image_url);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
        assert_eq!(store.get("2").await.unwrap().unwrap(), after);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = InMemoryEntryStore::seeded();
        assert!(store.delete("1").await.unwrap());
        assert!(!store.delete("1").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_reset_restores_seed_data() {
        let store = InMemoryEntryStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        store.create(NewEntry::new("a", "b")).await.unwrap();
        store.reset().await.unwrap();

        assert_eq!(store.list().await.unwrap(), seed_entries());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_keep_unique_ids() {
        let store = Arc::new(InMemoryEntryStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(NewEntry::new(format!("title {i}"), "desc"))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let entries = store.list().await.unwrap();
        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(entries.len(), 32);
        assert_eq!(ids.len(), 32);
    }
}
