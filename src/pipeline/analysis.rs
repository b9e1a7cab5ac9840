use tracing::{info, warn};
use uuid::Uuid;

use crate::config::LimitsConfig;
use crate::graph::{build_attack_graph, AttackGraph};
use crate::models::{AttackPath, ScanBundle};
use crate::paths::extract_attack_paths;

/// Graph and ranked paths for one scan snapshot.
#[derive(Debug, Clone)]
pub struct ScanAnalysis {
    pub scan_id: Uuid,
    pub target: Option<String>,
    pub graph: AttackGraph,
    pub attack_paths: Vec<AttackPath>,
}

/// Cap the inputs, build the graph and extract its attack paths.
pub fn analyze(bundle: &ScanBundle, limits: &LimitsConfig) -> ScanAnalysis {
    let scan_id = Uuid::new_v4();
    let graph = build_capped_graph(bundle, limits);
    let attack_paths = extract_attack_paths(&graph);

    info!(
        scan_id = %scan_id,
        target = bundle.target.as_deref().unwrap_or("unknown"),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        paths = attack_paths.len(),
        "Scan analyzed"
    );

    ScanAnalysis {
        scan_id,
        target: bundle.target.clone(),
        graph,
        attack_paths,
    }
}

/// Build the graph from at most `limits` records of each kind.
pub fn build_capped_graph(bundle: &ScanBundle, limits: &LimitsConfig) -> AttackGraph {
    let ports = capped(bundle.ports(), limits.max_ports, "ports");
    let pages = capped(bundle.pages().to_vec(), limits.max_pages, "pages");
    let alerts = capped(bundle.alerts().to_vec(), limits.max_alerts, "alerts");
    build_attack_graph(&ports, &pages, &alerts)
}

fn capped<T>(mut records: Vec<T>, limit: Option<usize>, kind: &str) -> Vec<T> {
    if let Some(limit) = limit {
        if records.len() > limit {
            warn!(kind = %kind, total = records.len(), limit, "Input exceeds limit, truncating");
            records.truncate(limit);
        }
    }
    records
}
