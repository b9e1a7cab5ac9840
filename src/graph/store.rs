use std::collections::{HashMap, HashSet};

use super::edge::{Edge, Relation};
use super::node::{Node, NodeKind};

/// Directed multigraph of scan evidence.
///
/// Nodes keep insertion order and are addressed by string id. Parallel edges
/// between the same pair are allowed as long as their relations differ.
#[derive(Debug, Clone, Default)]
pub struct AttackGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    edge_keys: HashSet<(usize, usize, Relation)>,
    outgoing: Vec<Vec<usize>>,
}

impl AttackGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless its id is already taken. Returns whether it was added.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        true
    }

    /// Connect two existing nodes. Dangling endpoints and exact duplicates
    /// are dropped. Returns whether an edge was added.
    pub fn add_edge(&mut self, source: &str, target: &str, relation: Relation) -> bool {
        let (Some(&src), Some(&dst)) = (self.index.get(source), self.index.get(target)) else {
            return false;
        };
        if !self.edge_keys.insert((src, dst, relation)) {
            return false;
        }
        self.outgoing[src].push(dst);
        self.edges.push(Edge {
            source: source.to_string(),
            target: target.to_string(),
            relation,
        });
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct successor indices in edge insertion order.
    pub fn successors(&self, index: usize) -> Vec<usize> {
        let mut seen = HashSet::new();
        self.outgoing
            .get(index)
            .map(|targets| targets.iter().copied().filter(|t| seen.insert(*t)).collect())
            .unwrap_or_default()
    }

    /// Edges leaving `id`, in insertion order.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Indices of nodes matching `predicate`, in insertion order.
    pub fn indices_where(&self, predicate: impl Fn(&NodeKind) -> bool) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| predicate(&n.kind))
            .map(|(i, _)| i)
            .collect()
    }
}
