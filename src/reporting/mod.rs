pub mod formatter;
pub mod report;

pub use formatter::{format_attack_paths_markdown, format_severity_summary};
pub use report::{write_report, KillchainReport};
