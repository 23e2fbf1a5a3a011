use thiserror::Error;

use crate::types::{AttributeGroups, ShopConstraint};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unsupported shop constraint: {0}; shop group scoping is not supported")]
    UnsupportedConstraint(ShopConstraint),
    #[error(transparent)]
    Query(#[from] rusqlite::Error),
}

pub trait AttributeGroupRead {
    /// Load every attribute group visible under `constraint`, ordered by
    /// position, with all of its translations.
    fn get_attribute_groups(
        &self,
        constraint: &ShopConstraint,
    ) -> Result<AttributeGroups, StorageError>;
}
