//! Product hierarchy nodes
//!
//! The hierarchy is an externally maintained, flat list of nodes on four
//! levels. Each node names its parent by code; level-1 nodes have none.

use serde::{Deserialize, Serialize};

/// Deepest hierarchy level; only codes on this level may be assigned
pub const LEAF_LEVEL: u8 = 4;

/// One node of the product hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub level: u8,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl HierarchyNode {
    pub fn new(
        level: u8,
        code: impl Into<String>,
        name: impl Into<String>,
        parent: Option<&str>,
    ) -> Self {
        Self {
            level,
            code: code.into(),
            name: name.into(),
            parent: parent.map(str::to_string),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.level == LEAF_LEVEL
    }
}
