use clap::{Parser, Subcommand, Args};

use crate::config::GraphFormat;
use crate::paths::RiskLevel;

#[derive(Parser)]
#[command(name = "killchain", version, about = "Attack-graph and kill-chain path extraction for scan results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print ranked attack paths for a scan bundle
    Paths(PathsArgs),
    /// Export the attack graph for visualization
    Graph(GraphArgs),
    /// Write kill-chain report files for a scan bundle
    Report(ReportArgs),
    /// Analyze several scan bundles in parallel
    Batch(BatchArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
    /// Show version and build information
    Version,
}

#[derive(Args, Clone)]
pub struct PathsArgs {
    /// Scan bundle JSON (port scan, vulnerability scan, crawl)
    #[arg(short, long)]
    pub input: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Only paths ending in this threat (id such as threat:xss, or label)
    #[arg(long)]
    pub threat: Option<String>,

    /// Only paths at or above this risk: informational, low, medium, high, critical
    #[arg(long)]
    pub min_risk: Option<RiskLevel>,
}

#[derive(Args, Clone)]
pub struct GraphArgs {
    /// Scan bundle JSON
    #[arg(short, long)]
    pub input: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Export format: json, dot
    #[arg(long, default_value = "json")]
    pub format: GraphFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Scan bundle JSON
    #[arg(short, long)]
    pub input: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory (overrides output.directory)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct BatchArgs {
    /// Scan bundle JSON files
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory; each scan gets a subdirectory named by scan id
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: String,
}
