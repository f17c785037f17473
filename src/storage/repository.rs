use async_trait::async_trait;

use crate::error::Result;
use crate::models::{EntryPatch, KnowledgeEntry, NewEntry};

/// 条目仓储 trait
///
/// 仓储独占条目集合并负责分配 ID 与时间戳。
/// 条目不存在不是错误：`get`/`update` 返回 `None`，`delete` 返回 `false`。
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// 按插入顺序列出全部条目（快照）
    async fn list(&self) -> Result<Vec<KnowledgeEntry>>;

    /// 根据 ID 获取条目
    async fn get(&self, id: &str) -> Result<Option<KnowledgeEntry>>;

    /// 创建条目
    async fn create(&self, input: NewEntry) -> Result<KnowledgeEntry>;

    /// 部分更新条目
    async fn update(&self, id: &str, patch: EntryPatch) -> Result<Option<KnowledgeEntry>>;

    /// 删除条目，返回是否发生了删除
    async fn delete(&self, id: &str) -> Result<bool>;

    /// 恢复为示例数据（仅用于测试）
    async fn reset(&self) -> Result<()>;

    /// 统计数量
    async fn count(&self) -> Result<usize>;
}
