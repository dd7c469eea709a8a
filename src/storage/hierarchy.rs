//! Read-only product hierarchy
//!
//! The hierarchy is maintained outside matreq and dropped into
//! hierarchy.json as a flat list of `{level, code, name, parent}` nodes.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::MatreqError;
use crate::models::HierarchyNode;

use super::file_io::read_json;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct HierarchyData {
    pub nodes: Vec<HierarchyNode>,
}

/// Lookup over the 4-level product hierarchy
pub struct HierarchyRepository {
    path: PathBuf,
    nodes: RwLock<Vec<HierarchyNode>>,
}

impl HierarchyRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            nodes: RwLock::new(Vec::new()),
        }
    }

    /// Load nodes from disk; a missing file means an empty hierarchy
    pub fn load(&self) -> Result<(), MatreqError> {
        let file_data: HierarchyData = read_json(&self.path)?;

        let mut nodes = self
            .nodes
            .write()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *nodes = file_data.nodes;
        nodes.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.code.cmp(&b.code)));

        debug!(count = nodes.len(), path = %self.path.display(), "loaded hierarchy");
        Ok(())
    }

    pub fn is_empty(&self) -> Result<bool, MatreqError> {
        let nodes = self
            .nodes
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(nodes.is_empty())
    }

    /// Find a node by code
    pub fn get(&self, code: &str) -> Result<Option<HierarchyNode>, MatreqError> {
        let nodes = self
            .nodes
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let code = code.trim();
        Ok(nodes.iter().find(|n| n.code == code).cloned())
    }

    /// Options for one step of the cascading selector
    ///
    /// With no parent this returns the level-1 nodes.
    pub fn children(&self, parent: Option<&str>) -> Result<Vec<HierarchyNode>, MatreqError> {
        let nodes = self
            .nodes
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(nodes
            .iter()
            .filter(|n| match parent {
                Some(parent) => n.parent.as_deref() == Some(parent.trim()),
                None => n.level == 1,
            })
            .cloned()
            .collect())
    }

    /// The chain of nodes from level 1 down to `code`
    pub fn path(&self, code: &str) -> Result<Vec<HierarchyNode>, MatreqError> {
        let mut chain = Vec::new();
        let mut current = self
            .get(code)?
            .ok_or_else(|| MatreqError::hierarchy_node_not_found(code.trim()))?;

        loop {
            let parent = current.parent.clone();
            chain.push(current);

            let Some(parent) = parent else { break };
            if chain.iter().any(|n| n.code == parent) {
                return Err(MatreqError::Validation(format!(
                    "Hierarchy contains a cycle at '{}'",
                    parent
                )));
            }
            current = self
                .get(&parent)?
                .ok_or_else(|| MatreqError::hierarchy_node_not_found(parent.clone()))?;
        }

        chain.reverse();
        Ok(chain)
    }

    /// Whether `code` names a leaf (level-4) node
    pub fn is_leaf_code(&self, code: &str) -> Result<bool, MatreqError> {
        Ok(self.get(code)?.map(|n| n.is_leaf()).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file_io::write_json_atomic;
    use tempfile::TempDir;

    fn sample_nodes() -> Vec<HierarchyNode> {
        vec![
            HierarchyNode::new(1, "10", "Food", None),
            HierarchyNode::new(1, "20", "Beverage", None),
            HierarchyNode::new(2, "1010", "Noodles", Some("10")),
            HierarchyNode::new(3, "101010", "Instant", Some("1010")),
            HierarchyNode::new(4, "10101001", "Cup Ramen", Some("101010")),
            HierarchyNode::new(4, "10101002", "Bag Ramen", Some("101010")),
        ]
    }

    fn create_test_repo() -> (TempDir, HierarchyRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hierarchy.json");
        write_json_atomic(
            &path,
            &HierarchyData {
                nodes: sample_nodes(),
            },
        )
        .unwrap();

        let repo = HierarchyRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = HierarchyRepository::new(temp_dir.path().join("hierarchy.json"));
        repo.load().unwrap();
        assert!(repo.is_empty().unwrap());
    }

    #[test]
    fn test_children() {
        let (_temp_dir, repo) = create_test_repo();

        let roots: Vec<_> = repo.children(None).unwrap().into_iter().map(|n| n.code).collect();
        assert_eq!(roots, vec!["10", "20"]);

        let leaves = repo.children(Some("101010")).unwrap();
        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().all(|n| n.is_leaf()));
    }

    #[test]
    fn test_path() {
        let (_temp_dir, repo) = create_test_repo();

        let path: Vec<_> = repo
            .path("10101002")
            .unwrap()
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(path, vec!["Food", "Noodles", "Instant", "Bag Ramen"]);

        assert!(repo.path("999").unwrap_err().is_not_found());
    }

    #[test]
    fn test_is_leaf_code() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.is_leaf_code("10101001").unwrap());
        assert!(!repo.is_leaf_code("1010").unwrap());
        assert!(!repo.is_leaf_code("nope").unwrap());
    }
}
