use tracing::{debug, trace};

use super::edge::Relation;
use super::node::{normalize_url, page_id, port_id, Node};
use super::rules::classify_alert;
use super::store::AttackGraph;
use super::threat::ThreatCategory;
use crate::models::{AlertRecord, PageRecord, PortRecord};

const FTP_PORT: u32 = 21;
const DEFAULT_RISK: &str = "Informational";

/// Build the evidence graph for one scan.
///
/// Pure and total: malformed records are skipped, edges to unknown nodes are
/// dropped, and the six threat nodes are always present.
pub fn build_attack_graph(
    ports: &[PortRecord],
    pages: &[PageRecord],
    alerts: &[AlertRecord],
) -> AttackGraph {
    let mut graph = AttackGraph::new();

    add_port_nodes(&mut graph, ports);
    add_page_nodes(&mut graph, pages);
    for threat in ThreatCategory::ALL {
        graph.add_node(Node::threat(threat.id(), threat.label()));
    }
    add_alerts(&mut graph, alerts);
    add_port_threats(&mut graph, ports);

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Attack graph built"
    );
    graph
}

fn add_port_nodes(graph: &mut AttackGraph, ports: &[PortRecord]) {
    for record in ports {
        let Some(number) = record.port else {
            trace!("Skipping port record without a port number");
            continue;
        };
        graph.add_node(Node::port(
            number,
            record.service.as_deref(),
            record.state.as_deref(),
        ));
    }
}

fn add_page_nodes(graph: &mut AttackGraph, pages: &[PageRecord]) {
    for record in pages {
        let raw = record.url.as_deref().unwrap_or_default();
        if raw.is_empty() {
            trace!("Skipping page record without a URL");
            continue;
        }
        graph.add_node(Node::page(normalize_url(raw)));
    }
}

fn add_alerts(graph: &mut AttackGraph, alerts: &[AlertRecord]) {
    for (position, alert) in alerts.iter().enumerate() {
        let key = alert
            .identifier()
            .or_else(|| alert.title())
            .map(str::to_string)
            .unwrap_or_else(|| format!("alert-{}", position + 1));
        let name = alert
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Alert {}", key));
        let risk = alert
            .risk
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_RISK);
        let raw_url = alert.url.as_deref().unwrap_or_default();
        let url = normalize_url(raw_url);

        let vuln = Node::vuln(&key, &name, risk, url);
        let vuln_id = vuln.id.clone();
        graph.add_node(vuln);

        if !raw_url.is_empty() {
            let page = page_id(url);
            if !graph.add_edge(&page, &vuln_id, Relation::HasVulnerability) {
                trace!(vuln = %vuln_id, url = %url, "Alert page was not crawled");
            }
        }

        let description = alert.description.as_deref().unwrap_or_default();
        for threat in classify_alert(&name, description) {
            graph.add_edge(&vuln_id, threat.id(), Relation::LeadsTo);
        }
    }
}

fn add_port_threats(graph: &mut AttackGraph, ports: &[PortRecord]) {
    for record in ports {
        let Some(number) = record.port else { continue };
        if !record.is_open() {
            continue;
        }
        let id = port_id(number);
        if number == FTP_PORT {
            graph.add_edge(&id, ThreatCategory::FtpWeakness.id(), Relation::MayEnable);
            graph.add_edge(&id, ThreatCategory::SecurityMisconfig.id(), Relation::MayEnable);
        }
        let service = record.service.as_deref().unwrap_or_default().to_lowercase();
        if service == "http" || service == "https" {
            graph.add_edge(&id, ThreatCategory::SecurityMisconfig.id(), Relation::Exposes);
        }
    }
}
