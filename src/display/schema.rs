//! Attribute schema display formatting

use crate::schema::{self, AttrKey, AttributeDef, Group};

use super::pad;

/// Format the attributes of one group, or of every group
pub fn format_attribute_list(group: Option<Group>) -> String {
    let groups: Vec<Group> = match group {
        Some(group) => vec![group],
        None => Group::ALL.to_vec(),
    };

    let mut output = String::new();
    for group in groups {
        let defs: Vec<&AttributeDef> = schema::attributes_in(group).collect();
        if defs.is_empty() {
            continue;
        }

        let label_width = defs
            .iter()
            .map(|d| d.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);

        output.push_str(&format!("{} ({})\n", group.title(), defs.len()));
        output.push_str(&format!(
            "  {:<12}  {}  {:<9}  {}\n",
            "Key",
            pad("Label", label_width),
            "Kind",
            "Flags"
        ));
        for def in defs {
            output.push_str(&format!(
                "  {:<12}  {}  {:<9}  {}\n",
                def.key.code(),
                pad(def.label, label_width),
                def.kind.name(),
                flags(def)
            ));
        }
        output.push('\n');
    }

    output
}

/// Format everything the schema knows about one attribute
pub fn format_attribute_details(key: AttrKey) -> String {
    let def = schema::attribute(key);

    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", def.label, key));
    output.push_str(&format!("  Group:     {}\n", def.group.title()));
    output.push_str(&format!("  Kind:      {}\n", def.kind.name()));
    output.push_str(&format!(
        "  Required:  {}\n",
        if def.required { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "  Fixed:     {}\n",
        if def.fixed { "Yes" } else { "No" }
    ));
    if let Some(default) = def.default {
        output.push_str(&format!("  Default:   {}\n", default));
    }
    if let Some(values) = def.kind.permitted_values() {
        output.push_str(&format!("  Values:    {}\n", values.join(", ")));
    }

    output
}

fn flags(def: &AttributeDef) -> String {
    let mut flags = Vec::new();
    if def.required {
        flags.push("required".to_string());
    }
    if def.fixed {
        flags.push("fixed".to_string());
    }
    if let Some(default) = def.default {
        flags.push(format!("default={}", default));
    }
    flags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_single_group() {
        let output = format_attribute_list(Some(Group::Units));
        assert!(output.starts_with("Unit Conversion (3)"));
        assert!(output.contains("MEINH"));
        assert!(!output.contains("MAKTX"));
    }

    #[test]
    fn test_list_all_groups() {
        let output = format_attribute_list(None);
        for group in Group::ALL {
            if schema::attributes_in(*group).next().is_some() {
                assert!(output.contains(group.title()));
            }
        }
    }

    #[test]
    fn test_details() {
        let output = format_attribute_details(AttrKey::Class);
        assert!(output.contains("Fixed:     Yes"));
        assert!(output.contains("Default:   ZMAT_FOOD"));

        let output = format_attribute_details(AttrKey::Mtart);
        assert!(output.contains("Required:  Yes"));
        assert!(output.contains("FERT"));
    }
}
