use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::node::{Node, NodeKind};
use super::store::AttackGraph;

/// Serializable snapshot of a graph for visualization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl From<&AttackGraph> for GraphExport {
    fn from(graph: &AttackGraph) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }
}

pub fn to_json(graph: &AttackGraph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&GraphExport::from(graph))
}

/// Render the graph as Graphviz DOT, one shape per node type.
pub fn to_dot(graph: &AttackGraph) -> String {
    let mut out = String::from("digraph attack_graph {\n    rankdir=LR;\n");
    for node in graph.nodes() {
        let shape = match node.kind {
            NodeKind::Port { .. } => "box",
            NodeKind::Page => "note",
            NodeKind::Vuln { .. } => "ellipse",
            NodeKind::Threat => "octagon",
        };
        out.push_str(&format!(
            "    \"{}\" [label=\"{}\", shape={}];\n",
            escape(&node.id),
            escape(&node.label),
            shape
        ));
    }
    for edge in graph.edges() {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
            escape(&edge.source),
            escape(&edge.target),
            edge.relation
        ));
    }
    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
