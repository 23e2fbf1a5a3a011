use std::fmt;

use super::{ShopGroupId, ShopId};

/// Multi-shop scope a read is restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopConstraint {
    AllShops,
    Shop(ShopId),
    ShopGroup(ShopGroupId),
}

impl ShopConstraint {
    /// Build a constraint from the optional ids a caller collected.
    ///
    /// A shop group takes precedence over a shop; neither means all shops.
    pub fn from_parts(shop: Option<ShopId>, shop_group: Option<ShopGroupId>) -> Self {
        match (shop, shop_group) {
            (_, Some(group)) => ShopConstraint::ShopGroup(group),
            (Some(shop), None) => ShopConstraint::Shop(shop),
            (None, None) => ShopConstraint::AllShops,
        }
    }

    pub fn shop_id(&self) -> Option<ShopId> {
        match self {
            ShopConstraint::Shop(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for ShopConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopConstraint::AllShops => write!(f, "all shops"),
            ShopConstraint::Shop(id) => write!(f, "shop {id}"),
            ShopConstraint::ShopGroup(id) => write!(f, "shop group {id}"),
        }
    }
}
