use indexmap::{map::Entry, IndexMap};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{AttributeGroupId, LanguageId};

/// Attribute groups keyed by id, in the order they were first read.
pub type AttributeGroups = IndexMap<AttributeGroupId, AttributeGroup>;

/// A product variation axis ("Color", "Size") with its localized labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroup {
    pub id: AttributeGroupId,
    pub is_color_group: bool,
    pub group_type: String,
    pub position: u32,
    pub name: BTreeMap<LanguageId, String>,
    pub public_name: BTreeMap<LanguageId, String>,
}

/// One joined row: group columns plus a single translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeGroupRow {
    pub id: AttributeGroupId,
    pub lang: LanguageId,
    pub is_color_group: bool,
    pub group_type: String,
    pub position: u32,
    pub name: String,
    pub public_name: String,
}

impl AttributeGroup {
    pub fn new(id: AttributeGroupId) -> Self {
        Self {
            id,
            is_color_group: false,
            group_type: String::new(),
            position: 0,
            name: BTreeMap::new(),
            public_name: BTreeMap::new(),
        }
    }

    /// True when the row's group columns differ from what is stored.
    pub fn disagrees_with(&self, row: &AttributeGroupRow) -> bool {
        self.is_color_group != row.is_color_group
            || self.group_type != row.group_type
            || self.position != row.position
    }

    /// Overwrite the group columns and record the row's translation.
    pub fn apply(&mut self, row: AttributeGroupRow) {
        self.is_color_group = row.is_color_group;
        self.group_type = row.group_type;
        self.position = row.position;
        self.name.insert(row.lang, row.name);
        self.public_name.insert(row.lang, row.public_name);
    }
}

/// Fold joined rows into one entity per group id.
///
/// Later rows overwrite the group columns of earlier ones; a warning is
/// logged when they disagree.
pub fn aggregate_rows<I>(rows: I) -> AttributeGroups
where
    I: IntoIterator<Item = AttributeGroupRow>,
{
    let mut groups = AttributeGroups::new();
    for row in rows {
        match groups.entry(row.id) {
            Entry::Occupied(mut entry) => {
                let group = entry.get_mut();
                if group.disagrees_with(&row) {
                    log::warn!(
                        "attribute group {} has inconsistent rows (lang {}), keeping the last one",
                        row.id,
                        row.lang
                    );
                }
                group.apply(row);
            }
            Entry::Vacant(entry) => {
                entry.insert(AttributeGroup::new(row.id)).apply(row);
            }
        }
    }
    groups
}
