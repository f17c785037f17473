//! 核心数据模型模块
//!
//! 定义知识条目 KnowledgeEntry 及其创建、更新输入。

pub mod entry;

pub use entry::*;
