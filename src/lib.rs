pub mod app;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod storage;
pub mod tracing;
pub mod types;

pub use storage::{AttributeGroupRead, SqliteStorage, StorageError, TablePrefix};
pub use types::{AttributeGroup, AttributeGroupId, AttributeGroups, LanguageId, ShopConstraint};
