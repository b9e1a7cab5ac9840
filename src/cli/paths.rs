use console::style;
use tracing::info;

use crate::cli::commands::PathsArgs;
use crate::cli::load_config;
use crate::errors::KillchainError;
use crate::models::{AttackPath, ScanBundle};
use crate::paths::{risk_rank, PathFilter};
use crate::pipeline::analyze;

pub async fn handle_paths(args: PathsArgs) -> Result<(), KillchainError> {
    let config = load_config(args.config.as_deref()).await?;
    let bundle = ScanBundle::load(std::path::Path::new(&args.input)).await?;
    info!(input = %args.input, "Extracting attack paths");

    let analysis = analyze(&bundle, &config.limits());
    let filter = PathFilter {
        min_risk: args.min_risk,
        threat: args.threat.clone(),
    };
    let paths = filter.apply(&analysis.attack_paths);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    if paths.is_empty() {
        println!("No attack paths were detected.");
        return Ok(());
    }
    for path in &paths {
        println!("{}", render_path(path));
    }
    if !filter.is_empty() {
        println!(
            "\n{}",
            style(format!("{} of {} paths shown", paths.len(), analysis.attack_paths.len())).dim()
        );
    }
    Ok(())
}

fn render_path(path: &AttackPath) -> String {
    let risk = match risk_rank(&path.risk) {
        4 => style(path.risk.as_str()).red().bold(),
        3 => style(path.risk.as_str()).red(),
        2 => style(path.risk.as_str()).yellow(),
        1 => style(path.risk.as_str()).cyan(),
        _ => style(path.risk.as_str()).dim(),
    };
    format!(
        "{:<8} [{}] {}\n         {}",
        style(&path.id).bold(),
        risk,
        path.threat,
        style(&path.summary).dim()
    )
}
