use std::path::PathBuf;

use crate::storage::TablePrefix;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub db_path: PathBuf,
    pub table_prefix: TablePrefix,
    pub log_file: Option<PathBuf>,
}
