//! 条目服务
//!
//! 在仓储之上提供条目的业务操作：把"不存在"转换为 `AppError::NotFound`，
//! 并在访问仓储前插入可配置的模拟网络延迟。

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{EntryPatch, KnowledgeEntry, NewEntry};
use crate::storage::EntryRepository;

/// 条目服务 trait
#[async_trait]
pub trait EntryService: Send + Sync {
    /// 列出全部条目
    async fn list(&self) -> Result<Vec<KnowledgeEntry>>;

    /// 根据 ID 获取条目
    async fn get(&self, id: &str) -> Result<KnowledgeEntry>;

    /// 创建条目，输入须已通过校验
    async fn create(&self, input: NewEntry) -> Result<KnowledgeEntry>;

    /// 部分更新条目
    async fn update(&self, id: &str, patch: EntryPatch) -> Result<KnowledgeEntry>;

    /// 删除条目
    async fn delete(&self, id: &str) -> Result<()>;

    /// 恢复示例数据
    async fn reset(&self) -> Result<()>;

    /// 条目数量
    async fn count(&self) -> Result<usize>;
}

/// 条目服务实现
pub struct EntryServiceImpl {
    repository: Arc<dyn EntryRepository>,
    latency: Duration,
}

impl EntryServiceImpl {
    /// 创建新的服务实例
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self {
            repository,
            latency: Duration::ZERO,
        }
    }

    /// 设置模拟延迟
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// 模拟网络延迟。只是异步休眠，不持有任何锁。
    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl EntryService for EntryServiceImpl {
    async fn list(&self) -> Result<Vec<KnowledgeEntry>> {
        self.simulate_latency().await;
        self.repository.list().await
    }

    async fn get(&self, id: &str) -> Result<KnowledgeEntry> {
        self.simulate_latency().await;
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::entry_not_found(id))
    }

    async fn create(&self, input: NewEntry) -> Result<KnowledgeEntry> {
        self.simulate_latency().await;
        let entry = self.repository.create(input).await?;
        info!(entry_id = %entry.id, "entry created");
        Ok(entry)
    }

    async fn update(&self, id: &str, patch: EntryPatch) -> Result<KnowledgeEntry> {
        self.simulate_latency().await;
        let entry = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::entry_not_found(id))?;
        info!(entry_id = %entry.id, "entry updated");
        Ok(entry)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.simulate_latency().await;
        if !self.repository.delete(id).await? {
            return Err(AppError::entry_not_found(id));
        }
        info!(entry_id = %id, "entry deleted");
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        self.repository.reset().await?;
        info!("entries reset to seed data");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let count = self.repository.count().await?;
        debug!(count, "entry count");
        Ok(count)
    }
}

/// 创建条目服务
pub fn create_entry_service(
    repository: Arc<dyn EntryRepository>,
    latency: Duration,
) -> Box<dyn EntryService> {
    Box::new(EntryServiceImpl::new(repository).with_latency(latency))
}
