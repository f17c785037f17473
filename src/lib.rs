//! Knowledge Capture - 知识条目服务
//!
//! 为制造业技术人员记录和浏览知识条目（标题、描述、可选配图）
//! 提供 REST API。数据仅保存在进程内存中。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;
