use clap::Parser;
use killchain::{cli, config, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.with_ansi(!cli.no_color).init();
    }

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = match cli.command {
        cli::Commands::Paths(args) => cli::paths::handle_paths(args).await,
        cli::Commands::Graph(args) => cli::graph::handle_graph(args).await,
        cli::Commands::Report(args) => cli::report::handle_report(args).await,
        cli::Commands::Batch(args) => cli::batch::handle_batch(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
        cli::Commands::Version => {
            println!("{}", cli::render_version());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::KillchainError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
