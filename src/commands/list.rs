use anyhow::{Context, Result};
use std::io::Write;

use super::CommandRunner;
use crate::context;
use crate::storage::{AttributeGroupRead, SqliteStorage};
use crate::types::{AttributeGroup, AttributeGroups, ShopConstraint};

pub struct ListGroups {
    pub constraint: ShopConstraint,
    pub json: bool,
}

/// `id position type [color] lang=name/public_name ...`
pub fn render_line(group: &AttributeGroup) -> String {
    let mut line = format!("{}\t{}\t{}", group.id, group.position, group.group_type);
    if group.is_color_group {
        line.push_str("\tcolor");
    }
    for (lang, name) in &group.name {
        let public_name = group.public_name.get(lang).map(String::as_str).unwrap_or("");
        line.push_str(&format!("\t{lang}={name}/{public_name}"));
    }
    line
}

pub fn render_json(groups: &AttributeGroups) -> Result<String> {
    let list: Vec<&AttributeGroup> = groups.values().collect();
    Ok(serde_json::to_string_pretty(&list)?)
}

impl CommandRunner for ListGroups {
    fn run(&self, ctx: &context::Context) -> Result<()> {
        let storage = SqliteStorage::new(&ctx.config.db_path, ctx.config.table_prefix.clone());
        let groups = storage
            .get_attribute_groups(&self.constraint)
            .with_context(|| format!("loading attribute groups for {}", self.constraint))?;
        log::info!("📦 {} attribute groups ({})", groups.len(), self.constraint);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if self.json {
            writeln!(out, "{}", render_json(&groups)?)?;
        } else {
            for group in groups.values() {
                writeln!(out, "{}", render_line(group))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{aggregate_rows, AttributeGroupId, AttributeGroupRow, LanguageId};

    fn groups() -> AttributeGroups {
        let base = AttributeGroupRow {
            id: AttributeGroupId::new(1),
            lang: LanguageId::new(1),
            is_color_group: true,
            group_type: "color".into(),
            position: 0,
            name: "Couleur".into(),
            public_name: "Color".into(),
        };
        let english = AttributeGroupRow {
            lang: LanguageId::new(2),
            name: "Color".into(),
            ..base.clone()
        };
        aggregate_rows(vec![base, english])
    }

    #[test]
    fn render_line_lists_every_language() {
        let groups = groups();
        let line = render_line(&groups[&AttributeGroupId::new(1)]);
        assert_eq!(line, "1\t0\tcolor\tcolor\t1=Couleur/Color\t2=Color/Color");
    }

    #[test]
    fn render_json_is_an_array_in_order() {
        let json = render_json(&groups()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["name"]["1"], "Couleur");
        assert_eq!(value[0]["publicName"]["2"], "Color");
    }
}
