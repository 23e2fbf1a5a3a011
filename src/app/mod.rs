use crate::{cli, context};
use anyhow::{Context as AnyhowContext, Result};

pub struct App {
    pub ctx: context::Context,
}

impl App {
    pub fn from_cli(cli: &cli::Cli) -> Result<Self> {
        let ctx = context::Context::from_cli(cli).context("reading configuration")?;

        crate::tracing::init(ctx.config.log_file.as_deref());
        log::info!("🚀 Starting attribute-groups");
        log::info!("📂 Database: {}", ctx.config.db_path.display());
        log::info!("🏷️ Table prefix: {:?}", ctx.config.table_prefix.as_str());
        if let Some(path) = ctx.config.log_file.as_deref() {
            log::info!("📝 Log file: {}", path.display());
        }

        Ok(Self { ctx })
    }
}

pub fn run() -> Result<()> {
    let cli = crate::cli::parse();
    let app = App::from_cli(&cli)?;
    cli.cmd.run(&app.ctx)
}
