use rusqlite::{types::Type, Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

use super::{
    query::{Order, SelectQuery},
    schema,
    traits::{AttributeGroupRead, StorageError},
    TablePrefix,
};
use crate::types::{
    aggregate_rows, AttributeGroupId, AttributeGroupRow, AttributeGroups, LanguageId,
    ShopConstraint,
};

const BUSY_TIMEOUT: Duration = Duration::from_millis(500);

/// Read-only view over a catalog database holding the attribute group tables.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub path: String,
    pub prefix: TablePrefix,
}

fn column_u32(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<u32> {
    let value: i64 = row.get(idx)?;
    value
        .try_into()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(err)))
}

fn map_attribute_group_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AttributeGroupRow> {
    let id = AttributeGroupId::new(column_u32(row, 0)?);
    let lang = LanguageId::new(column_u32(row, 1)?);
    let is_color_group: i64 = row.get(2)?;
    let group_type: String = row.get(3)?;
    let position = column_u32(row, 4)?;
    let name: String = row.get(5)?;
    let public_name: String = row.get(6)?;
    Ok(AttributeGroupRow {
        id,
        lang,
        is_color_group: is_color_group != 0,
        group_type,
        position,
        name,
        public_name,
    })
}

/// Select for the attribute groups visible under a shop, or under every
/// shop when `shop_id` is `None`.
pub fn attribute_groups_query(prefix: &TablePrefix, shop_id: Option<u32>) -> SelectQuery {
    let query = SelectQuery::new()
        .select([
            "ag.id_attribute_group",
            "agl.id_lang",
            "ag.is_color_group",
            "ag.group_type",
            "ag.position",
            "agl.name",
            "agl.public_name",
        ])
        .from(prefix.table("attribute_group"), "ag")
        .inner_join(
            prefix.table("attribute_group_lang"),
            "agl",
            "ag.id_attribute_group = agl.id_attribute_group",
        )
        .order_by("ag.position", Order::Asc);

    match shop_id {
        Some(shop_id) => query
            .inner_join(
                prefix.table("attribute_group_shop"),
                "ags",
                "ag.id_attribute_group = ags.id_attribute_group",
            )
            .and_where("ags.id_shop = ?")
            .bind(i64::from(shop_id)),
        None => query,
    }
}

fn db_load_attribute_groups(
    conn: &Connection,
    prefix: &TablePrefix,
    shop_id: Option<u32>,
) -> rusqlite::Result<AttributeGroups> {
    let query = attribute_groups_query(prefix, shop_id);
    let mut stmt = conn.prepare(&query.to_sql())?;
    let rows = stmt
        .query_map(
            rusqlite::params_from_iter(query.params().iter()),
            map_attribute_group_row,
        )?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(aggregate_rows(rows))
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P, prefix: TablePrefix) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
            prefix,
        }
    }

    /// Create the attribute group tables if the database lacks them.
    pub fn install_schema(&self) -> rusqlite::Result<()> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        schema::install(&conn, &self.prefix)
    }

    fn with_conn<F, T>(&self, f: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        f(&conn)
    }
}

impl AttributeGroupRead for SqliteStorage {
    fn get_attribute_groups(
        &self,
        constraint: &ShopConstraint,
    ) -> Result<AttributeGroups, StorageError> {
        let shop_id = match constraint {
            ShopConstraint::ShopGroup(_) => {
                return Err(StorageError::UnsupportedConstraint(*constraint));
            }
            ShopConstraint::Shop(shop) => Some(shop.value()),
            ShopConstraint::AllShops => None,
        };

        log::debug!("Loading attribute groups for {constraint}");
        let groups =
            self.with_conn(|conn| db_load_attribute_groups(conn, &self.prefix, shop_id))?;
        log::debug!("Loaded {} attribute groups for {constraint}", groups.len());
        Ok(groups)
    }
}
