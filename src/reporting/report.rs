use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::formatter::{format_attack_paths_markdown, format_severity_summary};
use crate::config::{GraphFormat, OutputConfig, ReportFormat};
use crate::errors::KillchainError;
use crate::graph::export;
use crate::models::AttackPath;
use crate::pipeline::ScanAnalysis;

pub const PATHS_FILE: &str = "attack_paths.json";
pub const MARKDOWN_FILE: &str = "killchain_report.md";
pub const REPORT_JSON_FILE: &str = "killchain_report.json";
pub const GRAPH_FILE_STEM: &str = "attack_graph";

/// Report document handed to downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillchainReport {
    pub scan_id: Uuid,
    pub target: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub node_count: usize,
    pub edge_count: usize,
    pub attack_paths: Vec<AttackPath>,
}

impl KillchainReport {
    pub fn from_analysis(analysis: &ScanAnalysis) -> Self {
        Self {
            scan_id: analysis.scan_id,
            target: analysis.target.clone(),
            generated_at: Utc::now(),
            node_count: analysis.graph.node_count(),
            edge_count: analysis.graph.edge_count(),
            attack_paths: analysis.attack_paths.clone(),
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# Kill-Chain Mapping Report\n\n");
        out.push_str(&format!(
            "- Target: {}\n- Scan ID: {}\n- Generated: {}\n- Graph: {} nodes, {} edges\n\n",
            self.target.as_deref().unwrap_or("unknown"),
            self.scan_id,
            self.generated_at.to_rfc3339(),
            self.node_count,
            self.edge_count,
        ));
        out.push_str(&format_severity_summary(&self.attack_paths));
        out.push('\n');
        out.push_str(&format_attack_paths_markdown(&self.attack_paths));
        out
    }
}

/// Write the report files for one analysis into `dir`, creating it if
/// needed. Returns the paths written.
pub async fn write_report(
    dir: &Path,
    analysis: &ScanAnalysis,
    output: &OutputConfig,
) -> Result<Vec<PathBuf>, KillchainError> {
    tokio::fs::create_dir_all(dir).await?;
    let report = KillchainReport::from_analysis(analysis);
    let mut written = Vec::new();

    let paths_path = dir.join(PATHS_FILE);
    tokio::fs::write(&paths_path, serde_json::to_string_pretty(&report.attack_paths)?).await?;
    written.push(paths_path);

    let report_path = match output.format {
        ReportFormat::Markdown => {
            let path = dir.join(MARKDOWN_FILE);
            tokio::fs::write(&path, report.to_markdown()).await?;
            path
        }
        ReportFormat::Json => {
            let path = dir.join(REPORT_JSON_FILE);
            tokio::fs::write(&path, serde_json::to_string_pretty(&report)?).await?;
            path
        }
    };
    written.push(report_path);

    if output.include_graph {
        let graph_path = dir.join(format!("{}.{}", GRAPH_FILE_STEM, output.graph_format.extension()));
        let rendered = match output.graph_format {
            GraphFormat::Json => export::to_json(&analysis.graph)?,
            GraphFormat::Dot => export::to_dot(&analysis.graph),
        };
        tokio::fs::write(&graph_path, rendered).await?;
        written.push(graph_path);
    }

    info!(
        scan_id = %analysis.scan_id,
        dir = %dir.display(),
        files = written.len(),
        "Kill-chain report written"
    );
    Ok(written)
}
