use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_PORTS: usize = 1000;
pub const DEFAULT_MAX_PAGES: usize = 100;
pub const DEFAULT_MAX_ALERTS: usize = 500;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct KillchainConfig {
    pub limits: Option<LimitsConfig>,
    pub output: Option<OutputConfig>,
}

impl KillchainConfig {
    pub fn limits(&self) -> LimitsConfig {
        self.limits.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

/// Input caps applied before a graph is built. Path enumeration grows
/// quickly with graph density, so inputs are bounded instead of the search.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_ports: Option<usize>,
    pub max_pages: Option<usize>,
    pub max_alerts: Option<usize>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_ports: Some(DEFAULT_MAX_PORTS),
            max_pages: Some(DEFAULT_MAX_PAGES),
            max_alerts: Some(DEFAULT_MAX_ALERTS),
        }
    }
}

impl LimitsConfig {
    pub fn unbounded() -> Self {
        Self {
            max_ports: None,
            max_pages: None,
            max_alerts: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub directory: Option<String>,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub include_graph: bool,
    #[serde(default)]
    pub graph_format: GraphFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    #[default]
    Json,
    Dot,
}

impl GraphFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Dot => "dot",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "dot" => Ok(Self::Dot),
            other => Err(format!("unknown graph format: {}", other)),
        }
    }
}
