use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// page -> vuln
    HasVulnerability,
    /// vuln -> threat
    LeadsTo,
    /// port -> threat, for services that are weak in themselves
    MayEnable,
    /// port -> threat, for exposed web services
    Exposes,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HasVulnerability => "has_vulnerability",
            Self::LeadsTo => "leads_to",
            Self::MayEnable => "may_enable",
            Self::Exposes => "exposes",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub relation: Relation,
}
