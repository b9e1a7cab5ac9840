pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod models;
pub mod paths;
pub mod pipeline;
pub mod reporting;

pub use graph::{build_attack_graph, AttackGraph};
pub use models::{AlertRecord, AttackPath, PageRecord, PortRecord, ScanBundle};
pub use paths::extract_attack_paths;
