mod attribute_group;
mod ids;
mod shop_constraint;

pub use attribute_group::{aggregate_rows, AttributeGroup, AttributeGroupRow, AttributeGroups};
pub use ids::{AttributeGroupId, IdError, LanguageId, ShopGroupId, ShopId};
pub use shop_constraint::ShopConstraint;
