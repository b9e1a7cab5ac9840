pub mod builder;
pub mod edge;
pub mod export;
pub mod node;
pub mod rules;
pub mod store;
pub mod threat;

pub use builder::build_attack_graph;
pub use edge::{Edge, Relation};
pub use export::GraphExport;
pub use node::{normalize_url, Node, NodeKind};
pub use rules::{classify_alert, ThreatRule, THREAT_RULES};
pub use store::AttackGraph;
pub use threat::ThreatCategory;
