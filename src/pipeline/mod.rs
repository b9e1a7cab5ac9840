pub mod analysis;
pub mod batch;

pub use analysis::{analyze, build_capped_graph, ScanAnalysis};
pub use batch::analyze_many;
