use serde::{Deserialize, Serialize};

/// A ranked walk from an entry point to a threat category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackPath {
    /// `path_1`, `path_2`, ... in emission order.
    pub id: String,
    /// Worst vulnerability risk seen along the path, as reported by the scanner.
    pub risk: String,
    /// Label of the terminal threat node.
    pub threat: String,
    pub summary: String,
    pub steps: Vec<String>,
    /// Node ids along the path, same order as `steps`.
    #[serde(skip)]
    pub node_ids: Vec<String>,
}

impl AttackPath {
    pub fn edge_count(&self) -> usize {
        self.node_ids.len().saturating_sub(1)
    }

    pub fn threat_id(&self) -> Option<&str> {
        self.node_ids.last().map(String::as_str)
    }
}
