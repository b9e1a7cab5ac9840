use crate::graph::AttackGraph;

/// All simple paths from `source` to `target` with at most `max_edges` edges.
///
/// Iterative depth-first search. `path` and `frontier` grow and shrink
/// together: `frontier[i]` holds the unexplored successors of `path[i]`, and
/// `on_path` mirrors the members of `path`. Paths come out in DFS order over
/// successors in edge insertion order.
pub fn bounded_simple_paths(
    graph: &AttackGraph,
    source: usize,
    target: usize,
    max_edges: usize,
) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    let node_count = graph.node_count();
    if max_edges == 0 || source == target || source >= node_count || target >= node_count {
        return found;
    }

    let mut on_path = vec![false; node_count];
    let mut path = vec![source];
    on_path[source] = true;
    let mut frontier = vec![graph.successors(source).into_iter()];

    loop {
        let next = match frontier.last_mut() {
            Some(children) => children.next(),
            None => break,
        };
        match next {
            Some(child) if on_path[child] => {}
            Some(child) if child == target => {
                let mut complete = path.clone();
                complete.push(child);
                found.push(complete);
            }
            Some(child) => {
                // Extending is only useful if the target is still reachable in budget.
                if path.len() < max_edges {
                    path.push(child);
                    on_path[child] = true;
                    frontier.push(graph.successors(child).into_iter());
                }
            }
            None => {
                frontier.pop();
                if let Some(done) = path.pop() {
                    on_path[done] = false;
                }
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, Relation};

    /// Chain a -> b -> c -> d -> e -> f plus a shortcut a -> c.
    fn chain() -> AttackGraph {
        let mut graph = AttackGraph::new();
        for id in ["a", "b", "c", "d", "e", "f"] {
            graph.add_node(Node::threat(id, id));
        }
        for (s, t) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "f"), ("a", "c")] {
            graph.add_edge(s, t, Relation::LeadsTo);
        }
        graph
    }

    fn ids(graph: &AttackGraph, paths: &[Vec<usize>]) -> Vec<Vec<String>> {
        paths
            .iter()
            .map(|p| p.iter().map(|&i| graph.node_at(i).id.clone()).collect())
            .collect()
    }

    #[test]
    fn test_depth_cutoff() {
        let graph = chain();
        let a = graph.index_of("a").unwrap();
        let e = graph.index_of("e").unwrap();
        let f = graph.index_of("f").unwrap();

        // a-b-c-d-e is 4 edges, a-c-d-e is 3
        assert_eq!(
            ids(&graph, &bounded_simple_paths(&graph, a, e, 4)),
            vec![vec!["a", "b", "c", "d", "e"], vec!["a", "c", "d", "e"]]
        );
        // a-c-d-e-f is the only path within 4 edges
        assert_eq!(
            ids(&graph, &bounded_simple_paths(&graph, a, f, 4)),
            vec![vec!["a", "c", "d", "e", "f"]]
        );
        assert!(bounded_simple_paths(&graph, a, f, 3).is_empty());
    }

    #[test]
    fn test_cycles_do_not_repeat_nodes() {
        let mut graph = chain();
        graph.add_edge("c", "a", Relation::LeadsTo);
        graph.add_edge("d", "b", Relation::LeadsTo);
        let a = graph.index_of("a").unwrap();
        let d = graph.index_of("d").unwrap();
        let paths = bounded_simple_paths(&graph, a, d, 4);
        assert_eq!(paths.len(), 2);
        for path in &paths {
            let mut sorted = path.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), path.len());
            assert!(path.len() <= 5);
        }
    }

    #[test]
    fn test_unreachable_and_degenerate() {
        let graph = chain();
        let a = graph.index_of("a").unwrap();
        let f = graph.index_of("f").unwrap();
        assert!(bounded_simple_paths(&graph, f, a, 4).is_empty());
        assert!(bounded_simple_paths(&graph, a, a, 4).is_empty());
        assert!(bounded_simple_paths(&graph, a, 99, 4).is_empty());
        assert!(bounded_simple_paths(&graph, a, f, 0).is_empty());
    }
}
