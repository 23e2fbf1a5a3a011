use rusqlite::Connection;

use super::TablePrefix;

/// Create the attribute group tables under `prefix` if they do not exist.
pub fn install(conn: &Connection, prefix: &TablePrefix) -> rusqlite::Result<()> {
    let attribute_group = prefix.table("attribute_group");
    let attribute_group_lang = prefix.table("attribute_group_lang");
    let attribute_group_shop = prefix.table("attribute_group_shop");

    log::info!("Installing attribute group schema (prefix {:?})", prefix.as_str());

    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {attribute_group} (
            id_attribute_group INTEGER PRIMARY KEY,
            is_color_group INTEGER NOT NULL DEFAULT 0,
            group_type TEXT NOT NULL DEFAULT 'select',
            position INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS {attribute_group_lang} (
            id_attribute_group INTEGER NOT NULL,
            id_lang INTEGER NOT NULL,
            name TEXT NOT NULL,
            public_name TEXT NOT NULL,
            PRIMARY KEY (id_attribute_group, id_lang)
        );
        CREATE TABLE IF NOT EXISTS {attribute_group_shop} (
            id_attribute_group INTEGER NOT NULL,
            id_shop INTEGER NOT NULL,
            PRIMARY KEY (id_attribute_group, id_shop)
        );
        "#
    ))
}
