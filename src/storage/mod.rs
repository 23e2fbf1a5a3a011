mod query;
pub mod schema;
pub mod sqlite;
mod table_prefix;
pub mod traits;

pub use query::{Order, SelectQuery};
pub use sqlite::SqliteStorage;
pub use table_prefix::{ConfigError, TablePrefix};
pub use traits::{AttributeGroupRead, StorageError};
