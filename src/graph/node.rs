use serde::{Deserialize, Serialize};

/// Type-specific payload of a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Port { service: String, state: String },
    Page,
    Vuln { risk: String, url: String },
    Threat,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Port { .. } => "port",
            Self::Page => "page",
            Self::Vuln { .. } => "vuln",
            Self::Threat => "threat",
        }
    }

    /// Ports and pages are the only places an attack path may start.
    pub fn is_entry(&self) -> bool {
        matches!(self, Self::Port { .. } | Self::Page)
    }

    pub fn is_threat(&self) -> bool {
        matches!(self, Self::Threat)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn port(number: u32, service: Option<&str>, state: Option<&str>) -> Self {
        let service = service.unwrap_or_default();
        let shown = if service.is_empty() { "unknown" } else { service };
        Self {
            id: port_id(number),
            label: format!("Port {} ({})", number, shown),
            kind: NodeKind::Port {
                service: service.to_string(),
                state: state.unwrap_or_default().to_string(),
            },
        }
    }

    /// `url` must already be normalized.
    pub fn page(url: &str) -> Self {
        Self {
            id: page_id(url),
            label: url.to_string(),
            kind: NodeKind::Page,
        }
    }

    pub fn vuln(key: &str, label: &str, risk: &str, url: &str) -> Self {
        Self {
            id: vuln_id(key),
            label: label.to_string(),
            kind: NodeKind::Vuln {
                risk: risk.to_string(),
                url: url.to_string(),
            },
        }
    }

    pub fn threat(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: NodeKind::Threat,
        }
    }

    /// Reported risk for vulnerability nodes.
    pub fn risk(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Vuln { risk, .. } => Some(risk),
            _ => None,
        }
    }
}

pub fn port_id(number: u32) -> String {
    format!("port:{}", number)
}

pub fn page_id(normalized_url: &str) -> String {
    format!("page:{}", normalized_url)
}

pub fn vuln_id(key: &str) -> String {
    format!("vuln:{}", key)
}

/// Drop a single trailing `/` so `http://h/p/` and `http://h/p` share a node.
pub fn normalize_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
