//! 服务模块

pub mod entry;

pub use entry::{EntryService, EntryServiceImpl, create_entry_service};
