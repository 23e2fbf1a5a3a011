use crate::cli::Command;
use crate::context;

pub mod list;
pub mod schema;

pub trait CommandRunner {
    fn run(&self, ctx: &context::Context) -> anyhow::Result<()>;
}

impl Command {
    pub fn run(&self, ctx: &context::Context) -> anyhow::Result<()> {
        match self {
            Command::List {
                shop,
                shop_group,
                json,
            } => list::ListGroups {
                constraint: crate::types::ShopConstraint::from_parts(*shop, *shop_group),
                json: *json,
            }
            .run(ctx),
            Command::InitSchema => schema::InitSchema.run(ctx),
        }
    }
}
