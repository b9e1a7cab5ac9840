use crate::cli::commands::ReportArgs;
use crate::cli::{load_config, output_dir};
use crate::errors::KillchainError;
use crate::models::ScanBundle;
use crate::pipeline::analyze;
use crate::reporting::write_report;

pub async fn handle_report(args: ReportArgs) -> Result<(), KillchainError> {
    let config = load_config(args.config.as_deref()).await?;
    let bundle = ScanBundle::load(std::path::Path::new(&args.input)).await?;

    let analysis = analyze(&bundle, &config.limits());
    let dir = output_dir(args.output.as_deref(), &config);
    let written = write_report(&dir, &analysis, &config.output()).await?;

    println!(
        "{} attack paths for scan {}",
        analysis.attack_paths.len(),
        analysis.scan_id
    );
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}
