use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Read catalog attribute groups (Color, Size, ...) from a shop database",
    long_about = "Loads attribute groups with their translated names from a catalog SQLite database, optionally restricted to a single shop."
)]
pub struct Cli {
    #[arg(
        long,
        env = "ATTRIBUTE_GROUPS_DB",
        default_value = "catalog.sqlite",
        value_name = "PATH",
        help = "Path to the catalog SQLite database"
    )]
    pub db: String,

    #[arg(
        long,
        env = "ATTRIBUTE_GROUPS_TABLE_PREFIX",
        default_value = "ps_",
        value_name = "PREFIX",
        help = "Prefix of the catalog table names"
    )]
    pub table_prefix: String,

    #[arg(
        long = "log-file",
        env = "ATTRIBUTE_GROUPS_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_shop() {
        let cli = Cli::try_parse_from([
            "attribute-groups",
            "--db",
            "shop.db",
            "--table-prefix",
            "ps_",
            "list",
            "--shop",
            "2",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.db, "shop.db");
        match cli.cmd {
            Command::List {
                shop,
                shop_group,
                json,
            } => {
                assert_eq!(shop.map(|s| s.value()), Some(2));
                assert!(shop_group.is_none());
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_shop_zero_and_both_scopes() {
        assert!(Cli::try_parse_from(["attribute-groups", "list", "--shop", "0"]).is_err());
        assert!(Cli::try_parse_from([
            "attribute-groups",
            "list",
            "--shop",
            "1",
            "--shop-group",
            "1"
        ])
        .is_err());
    }
}
