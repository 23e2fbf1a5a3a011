use anyhow::{Context, Result};

use super::CommandRunner;
use crate::context;
use crate::storage::SqliteStorage;

pub struct InitSchema;

impl CommandRunner for InitSchema {
    fn run(&self, ctx: &context::Context) -> Result<()> {
        let storage = SqliteStorage::new(&ctx.config.db_path, ctx.config.table_prefix.clone());
        storage
            .install_schema()
            .with_context(|| format!("installing schema in {}", ctx.config.db_path.display()))?;
        log::info!("✅ Schema ready in {}", ctx.config.db_path.display());
        Ok(())
    }
}
