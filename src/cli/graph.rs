use tracing::info;

use crate::cli::commands::GraphArgs;
use crate::cli::load_config;
use crate::config::GraphFormat;
use crate::errors::KillchainError;
use crate::graph::export;
use crate::models::ScanBundle;
use crate::pipeline::build_capped_graph;

pub async fn handle_graph(args: GraphArgs) -> Result<(), KillchainError> {
    let config = load_config(args.config.as_deref()).await?;
    let bundle = ScanBundle::load(std::path::Path::new(&args.input)).await?;
    let graph = build_capped_graph(&bundle, &config.limits());

    let rendered = match args.format {
        GraphFormat::Json => export::to_json(&graph)?,
        GraphFormat::Dot => export::to_dot(&graph),
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, rendered).await?;
            info!(path = %path, format = %args.format, nodes = graph.node_count(), "Graph exported");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
