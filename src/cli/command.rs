use clap::Subcommand;

use crate::types::{ShopGroupId, ShopId};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "List attribute groups",
        long_about = "List attribute groups ordered by position, with their names in every language. Without --shop every group of every shop is listed."
    )]
    List {
        #[arg(long, value_name = "ID", help = "Only groups associated with this shop")]
        shop: Option<ShopId>,
        #[arg(
            long,
            value_name = "ID",
            conflicts_with = "shop",
            help = "Shop group scope (not supported by the reader)"
        )]
        shop_group: Option<ShopGroupId>,
        #[arg(long, default_value_t = false, help = "Print a JSON array instead of text lines")]
        json: bool,
    },
    #[command(
        about = "Create the attribute group tables",
        long_about = "Create the attribute group, translation and shop association tables under the configured prefix if they are missing."
    )]
    InitSchema,
}
