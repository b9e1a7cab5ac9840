use std::collections::HashSet;

use tracing::{debug, trace};

use super::enumerate::bounded_simple_paths;
use super::severity::{risk_rank, RiskLevel};
use crate::graph::{AttackGraph, NodeKind};
use crate::models::AttackPath;

/// Longest path, in edges, considered an attack path.
pub const MAX_PATH_EDGES: usize = 4;

pub const SUMMARY_SEPARATOR: &str = " → ";

/// Enumerate ranked attack paths from every entry point to every threat.
///
/// Output is grouped by threat (graph order), then by entry point (ports
/// before pages, graph order within each), then by DFS order. A node
/// sequence reached from more than one search is emitted once.
pub fn extract_attack_paths(graph: &AttackGraph) -> Vec<AttackPath> {
    let ports = graph.indices_where(|k| matches!(k, NodeKind::Port { .. }));
    let pages = graph.indices_where(|k| matches!(k, NodeKind::Page));
    let threats = graph.indices_where(|k| k.is_threat());
    let entries: Vec<usize> = ports.into_iter().chain(pages).collect();

    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut attack_paths = Vec::new();

    for &threat in &threats {
        for &entry in &entries {
            for path in bounded_simple_paths(graph, entry, threat, MAX_PATH_EDGES) {
                if !seen.insert(path.clone()) {
                    trace!("Skipping duplicate node sequence");
                    continue;
                }
                let id = format!("path_{}", attack_paths.len() + 1);
                attack_paths.push(to_attack_path(graph, id, &path));
            }
        }
    }

    debug!(
        entries = entries.len(),
        threats = threats.len(),
        paths = attack_paths.len(),
        "Attack paths extracted"
    );
    attack_paths
}

/// Node-id sequences between two nodes, within the path length bound.
/// Unknown ids yield no paths.
pub fn paths_between(graph: &AttackGraph, source: &str, target: &str) -> Vec<Vec<String>> {
    let (Some(src), Some(dst)) = (graph.index_of(source), graph.index_of(target)) else {
        return Vec::new();
    };
    bounded_simple_paths(graph, src, dst, MAX_PATH_EDGES)
        .into_iter()
        .map(|path| path.into_iter().map(|i| graph.node_at(i).id.clone()).collect())
        .collect()
}

/// Worst risk label among the vulnerability nodes on `path`, as reported.
/// The first label reaching the highest rank wins.
pub fn path_severity(graph: &AttackGraph, path: &[usize]) -> String {
    let mut best_risk = RiskLevel::Informational.as_str().to_string();
    let mut best_rank = 0;
    for risk in path.iter().filter_map(|&i| graph.node_at(i).risk()) {
        let rank = risk_rank(risk);
        if rank > best_rank {
            best_rank = rank;
            best_risk = risk.to_string();
        }
    }
    best_risk
}

fn to_attack_path(graph: &AttackGraph, id: String, path: &[usize]) -> AttackPath {
    let nodes: Vec<_> = path.iter().map(|&i| graph.node_at(i)).collect();
    let steps: Vec<String> = nodes.iter().map(|n| n.label.clone()).collect();
    let threat = nodes.last().map(|n| n.label.clone()).unwrap_or_default();

    AttackPath {
        id,
        risk: path_severity(graph, path),
        threat,
        summary: steps.join(SUMMARY_SEPARATOR),
        steps,
        node_ids: nodes.iter().map(|n| n.id.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_attack_graph, Node, Relation};
    use crate::models::{AlertRecord, PageRecord, PortRecord};

    fn vuln_alert(id: &str, name: &str, risk: &str, url: &str) -> AlertRecord {
        AlertRecord {
            id: Some(id.to_string()),
            alert: Some(name.to_string()),
            risk: Some(risk.to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_graph_has_no_paths() {
        let graph = build_attack_graph(&[], &[], &[]);
        assert!(extract_attack_paths(&graph).is_empty());
    }

    #[test]
    fn test_ftp_port_paths() {
        let graph = build_attack_graph(&[PortRecord::new(21, "open", "ftp")], &[], &[]);
        let paths = extract_attack_paths(&graph);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].id, "path_1");
        assert_eq!(paths[0].threat, "FTP Service Weakness / Data Exposure");
        assert_eq!(paths[0].summary, "Port 21 (ftp) → FTP Service Weakness / Data Exposure");
        assert_eq!(paths[1].id, "path_2");
        assert_eq!(paths[1].threat, "General Security Misconfiguration");
        for path in &paths {
            assert_eq!(path.edge_count(), 1);
            assert_eq!(path.risk, "Informational");
        }
    }

    #[test]
    fn test_page_vuln_threat_path() {
        let pages = [PageRecord::new("http://x/a")];
        let alerts = [vuln_alert("1", "Anti-clickjacking Header Missing", "Medium", "http://x/a/")];
        let graph = build_attack_graph(&[], &pages, &alerts);

        let between = paths_between(&graph, "page:http://x/a", "threat:clickjacking");
        assert_eq!(between, vec![vec!["page:http://x/a", "vuln:1", "threat:clickjacking"]]);

        let paths = extract_attack_paths(&graph);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].risk, "Medium");
        assert_eq!(
            paths[0].steps,
            vec!["http://x/a", "Anti-clickjacking Header Missing", "Clickjacking Risk"]
        );
        assert_eq!(paths[0].threat_id(), Some("threat:clickjacking"));
    }

    #[test]
    fn test_unreachable_vuln_not_in_paths() {
        let alerts = [vuln_alert("2", "CSP Header Not Set", "High", "http://x/other")];
        let graph = build_attack_graph(&[], &[PageRecord::new("http://x/a")], &alerts);
        let paths = extract_attack_paths(&graph);
        assert!(paths.iter().all(|p| !p.node_ids.contains(&"vuln:2".to_string())));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_severity_takes_maximum_label() {
        let mut graph = AttackGraph::new();
        graph.add_node(Node::page("http://x"));
        graph.add_node(Node::vuln("1", "low one", "low", ""));
        graph.add_node(Node::vuln("2", "high one", "HIGH", ""));
        graph.add_node(Node::vuln("3", "odd one", "severe", ""));
        graph.add_node(Node::threat("threat:xss", "XSS"));
        graph.add_edge("page:http://x", "vuln:1", Relation::HasVulnerability);
        graph.add_edge("vuln:1", "vuln:3", Relation::LeadsTo);
        graph.add_edge("vuln:3", "vuln:2", Relation::LeadsTo);
        graph.add_edge("vuln:2", "threat:xss", Relation::LeadsTo);

        let paths = extract_attack_paths(&graph);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].risk, "HIGH");
        assert_eq!(paths[0].edge_count(), 4);
    }

    #[test]
    fn test_info_label_does_not_replace_default() {
        let mut graph = AttackGraph::new();
        graph.add_node(Node::page("http://x"));
        graph.add_node(Node::vuln("1", "banner", "Info", ""));
        graph.add_node(Node::threat("threat:xss", "XSS"));
        graph.add_edge("page:http://x", "vuln:1", Relation::HasVulnerability);
        graph.add_edge("vuln:1", "threat:xss", Relation::LeadsTo);
        assert_eq!(extract_attack_paths(&graph)[0].risk, "Informational");
    }

    #[test]
    fn test_ordering_and_uniqueness() {
        let ports = [PortRecord::new(21, "open", "ftp"), PortRecord::new(80, "open", "http")];
        let pages = [PageRecord::new("http://x/a"), PageRecord::new("http://x/b")];
        let alerts = [
            AlertRecord {
                description: Some("Security misconfiguration: clickjacking possible".into()),
                ..vuln_alert("1", "Missing Anti-clickjacking Header", "Low", "http://x/a")
            },
            vuln_alert("2", "CSP Header Not Set", "Critical", "http://x/b"),
        ];
        let graph = build_attack_graph(&ports, &pages, &alerts);
        let paths = extract_attack_paths(&graph);

        let threats: Vec<&str> = paths.iter().filter_map(|p| p.threat_id()).collect();
        assert_eq!(
            threats,
            vec![
                "threat:clickjacking",
                "threat:xss",
                "threat:ftp_weakness",
                "threat:security_misconfig",
                "threat:security_misconfig",
                "threat:security_misconfig",
            ]
        );
        // within misconfig: port 21, port 80, then page a
        assert_eq!(paths[3].node_ids[0], "port:21");
        assert_eq!(paths[4].node_ids[0], "port:80");
        assert_eq!(paths[5].node_ids[0], "page:http://x/a");
        assert_eq!(paths[1].risk, "Critical");

        let ids: HashSet<&str> = paths.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), paths.len());
        let steps: HashSet<&Vec<String>> = paths.iter().map(|p| &p.steps).collect();
        assert_eq!(steps.len(), paths.len());
    }

    #[test]
    fn test_paths_between_unknown_ids() {
        let graph = build_attack_graph(&[], &[], &[]);
        assert!(paths_between(&graph, "page:nowhere", "threat:xss").is_empty());
        assert!(paths_between(&graph, "threat:xss", "threat:unknown").is_empty());
    }
}
