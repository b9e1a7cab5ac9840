use tracing::{error, info};

use super::analysis::{analyze, ScanAnalysis};
use crate::config::LimitsConfig;
use crate::models::ScanBundle;

/// Analyze independent scans in parallel. Each task owns its bundle and
/// graph; results keep input order and a panicked task is skipped.
pub async fn analyze_many(bundles: Vec<ScanBundle>, limits: &LimitsConfig) -> Vec<ScanAnalysis> {
    let total = bundles.len();
    let handles: Vec<_> = bundles
        .into_iter()
        .map(|bundle| {
            let limits = limits.clone();
            tokio::task::spawn_blocking(move || analyze(&bundle, &limits))
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    let mut analyses = Vec::with_capacity(total);
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => error!(index = i, error = %e, "Analysis task panicked"),
        }
    }

    info!(requested = total, completed = analyses.len(), "Batch analysis complete");
    analyses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PortRecord;

    #[tokio::test]
    async fn test_batch_keeps_order_and_isolation() {
        let bundles = vec![
            ScanBundle::from_parts(vec![PortRecord::new(21, "open", "ftp")], vec![], vec![]),
            ScanBundle::from_parts(vec![], vec![], vec![]),
            ScanBundle::from_parts(vec![PortRecord::new(80, "open", "http")], vec![], vec![]),
        ];
        let analyses = analyze_many(bundles, &LimitsConfig::default()).await;
        let counts: Vec<usize> = analyses.iter().map(|a| a.attack_paths.len()).collect();
        assert_eq!(counts, vec![2, 0, 1]);
        assert_ne!(analyses[0].scan_id, analyses[2].scan_id);
        // ids restart per scan
        assert_eq!(analyses[2].attack_paths[0].id, "path_1");
    }
}
