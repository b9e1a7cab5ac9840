pub mod enumerate;
pub mod extractor;
pub mod filter;
pub mod severity;

pub use enumerate::bounded_simple_paths;
pub use extractor::{extract_attack_paths, path_severity, paths_between, MAX_PATH_EDGES};
pub use filter::PathFilter;
pub use severity::{risk_rank, RiskLevel};
