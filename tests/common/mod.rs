#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use attribute_groups::{SqliteStorage, TablePrefix};
use rusqlite::{params, Connection};
use tempfile::TempDir;

pub const PREFIX: &str = "ps_";

pub struct Catalog {
    pub dir: TempDir,
    pub path: PathBuf,
    conn: Connection,
}

impl Catalog {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("catalog.sqlite");
        SqliteStorage::new(&path, prefix())
            .install_schema()
            .expect("install schema");
        let conn = Connection::open(&path).expect("open catalog");
        Self { dir, path, conn }
    }

    pub fn storage(&self) -> SqliteStorage {
        SqliteStorage::new(&self.path, prefix())
    }

    pub fn group(&self, id: i64, is_color_group: bool, group_type: &str, position: i64) -> &Self {
        self.conn
            .execute(
                "INSERT INTO ps_attribute_group (id_attribute_group, is_color_group, group_type, position) VALUES (?1, ?2, ?3, ?4)",
                params![id, is_color_group as i64, group_type, position],
            )
            .expect("insert group");
        self
    }

    pub fn lang(&self, id: i64, lang: i64, name: &str, public_name: &str) -> &Self {
        self.conn
            .execute(
                "INSERT INTO ps_attribute_group_lang (id_attribute_group, id_lang, name, public_name) VALUES (?1, ?2, ?3, ?4)",
                params![id, lang, name, public_name],
            )
            .expect("insert lang");
        self
    }

    pub fn shop(&self, id: i64, shop: i64) -> &Self {
        self.conn
            .execute(
                "INSERT INTO ps_attribute_group_shop (id_attribute_group, id_shop) VALUES (?1, ?2)",
                params![id, shop],
            )
            .expect("insert shop");
        self
    }
}

pub fn prefix() -> TablePrefix {
    TablePrefix::new(PREFIX).expect("valid prefix")
}

pub fn base_cmd(db: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_attribute-groups"));
    cmd.env("DOTENV_PATH", db.with_extension("env"))
        .env_remove("ATTRIBUTE_GROUPS_DB")
        .env("ATTRIBUTE_GROUPS_TABLE_PREFIX", PREFIX)
        .env_remove("ATTRIBUTE_GROUPS_LOG_FILE")
        .env("RUST_LOG", "warn")
        .arg("--db")
        .arg(db);
    cmd
}
