use std::path::Path;

use tracing::{info, warn};

use crate::cli::commands::BatchArgs;
use crate::cli::{load_config, output_dir};
use crate::config::OutputConfig;
use crate::errors::KillchainError;
use crate::models::ScanBundle;
use crate::pipeline::{analyze_many, ScanAnalysis};
use crate::reporting::write_report;

pub async fn handle_batch(args: BatchArgs) -> Result<(), KillchainError> {
    let config = load_config(args.config.as_deref()).await?;

    let mut bundles = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        match ScanBundle::load(Path::new(input)).await {
            Ok(bundle) => bundles.push(bundle),
            Err(e) => warn!(input = %input, error = %e, "Skipping unreadable scan bundle"),
        }
    }
    if bundles.is_empty() {
        return Err(KillchainError::InvalidInput("no readable scan bundles".into()));
    }
    info!(bundles = bundles.len(), "Starting batch analysis");

    let analyses = analyze_many(bundles, &config.limits()).await;
    let root = output_dir(args.output.as_deref(), &config);
    write_batch_reports(&root, &analyses, &config.output()).await?;
    Ok(())
}

/// Write one report directory per analysis under `root`. A failed write is
/// logged and skipped; the batch fails only if no report was written.
pub async fn write_batch_reports(
    root: &Path,
    analyses: &[ScanAnalysis],
    output: &OutputConfig,
) -> Result<usize, KillchainError> {
    let mut written = 0;
    for analysis in analyses {
        let dir = root.join(analysis.scan_id.to_string());
        if let Err(e) = write_report(&dir, analysis, output).await {
            warn!(scan_id = %analysis.scan_id, error = %e, "Failed to write batch report");
            continue;
        }
        written += 1;
        println!(
            "{}  {:<40} {} paths",
            analysis.scan_id,
            analysis.target.as_deref().unwrap_or("unknown"),
            analysis.attack_paths.len()
        );
    }

    if written == 0 {
        return Err(KillchainError::Internal(format!(
            "no batch reports could be written ({} analyses)",
            analyses.len()
        )));
    }
    info!(written, total = analyses.len(), "Batch reports written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LimitsConfig;
    use crate::models::PortRecord;
    use crate::pipeline::analyze;

    fn ftp_analysis() -> ScanAnalysis {
        let bundle = ScanBundle::from_parts(vec![PortRecord::new(21, "open", "ftp")], vec![], vec![]);
        analyze(&bundle, &LimitsConfig::default())
    }

    #[tokio::test]
    async fn test_failed_write_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let analyses = vec![ftp_analysis(), ftp_analysis()];
        // a plain file where the first report directory should go
        std::fs::write(dir.path().join(analyses[0].scan_id.to_string()), "blocker").unwrap();

        let written = write_batch_reports(dir.path(), &analyses, &OutputConfig::default())
            .await
            .unwrap();
        assert_eq!(written, 1);
        assert!(dir
            .path()
            .join(analyses[1].scan_id.to_string())
            .join("attack_paths.json")
            .exists());
    }

    #[tokio::test]
    async fn test_all_writes_failing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("not-a-dir");
        std::fs::write(&root, "blocker").unwrap();

        let err = write_batch_reports(&root, &[ftp_analysis()], &OutputConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, KillchainError::Internal(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_empty_batch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_batch_reports(dir.path(), &[], &OutputConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, KillchainError::Internal(_)));
    }
}
