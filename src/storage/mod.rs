//! 存储层模块
//!
//! 条目仓储接口及其内存实现。数据只存在于进程内存中，重启即丢失。

pub mod memory;
pub mod repository;

pub use memory::InMemoryEntryStore;
pub use repository::EntryRepository;
