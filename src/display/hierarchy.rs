//! Product hierarchy display formatting

use crate::models::HierarchyNode;

/// Format one level of the cascading selector
pub fn format_hierarchy_nodes(nodes: &[HierarchyNode]) -> String {
    if nodes.is_empty() {
        return "No hierarchy nodes found.\n".to_string();
    }

    let code_width = nodes.iter().map(|n| n.code.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    for node in nodes {
        let leaf = if node.is_leaf() { "  (leaf)" } else { "" };
        output.push_str(&format!(
            "L{} {:<code_width$}  {}{}\n",
            node.level,
            node.code,
            node.name,
            leaf,
            code_width = code_width,
        ));
    }
    output
}

/// Format the chain from level 1 down to a node
pub fn format_hierarchy_path(path: &[HierarchyNode]) -> String {
    path.iter()
        .map(|n| format!("{} {}", n.code, n.name))
        .collect::<Vec<_>>()
        .join(" > ")
}
