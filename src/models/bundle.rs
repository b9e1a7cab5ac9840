use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use super::records::{AlertRecord, PageRecord, PortRecord};
use crate::errors::KillchainError;

/// Everything one scan produced: port scan, vulnerability scan and crawl.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanBundle {
    #[serde(default, deserialize_with = "lenient::string")]
    pub target: Option<String>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub nmap: PortScan,
    #[serde(default, deserialize_with = "lenient::section")]
    pub zap: VulnScan,
    #[serde(default, alias = "crawler", deserialize_with = "lenient::section")]
    pub crawl: CrawlResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortScan {
    #[serde(default, deserialize_with = "lenient::records")]
    pub ports: Vec<PortRecord>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub hosts: Vec<HostScan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostScan {
    #[serde(default, deserialize_with = "lenient::string")]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub ports: Vec<PortRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VulnScan {
    #[serde(default, deserialize_with = "lenient::records")]
    pub alerts: Vec<AlertRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlResult {
    #[serde(default, deserialize_with = "lenient::records")]
    pub pages: Vec<PageRecord>,
}

impl ScanBundle {
    pub fn from_parts(ports: Vec<PortRecord>, pages: Vec<PageRecord>, alerts: Vec<AlertRecord>) -> Self {
        Self {
            target: None,
            nmap: PortScan { ports, hosts: Vec::new() },
            zap: VulnScan { alerts },
            crawl: CrawlResult { pages },
        }
    }

    /// Parse a bundle document. Combined-scan responses wrapped in a
    /// top-level `result` object are unwrapped first.
    pub fn from_json_str(content: &str) -> Result<Self, KillchainError> {
        let mut value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(KillchainError::InvalidInput(
                "scan bundle must be a JSON object".to_string(),
            ));
        }
        let inner = value
            .get_mut("result")
            .filter(|v| v.is_object())
            .map(Value::take);
        if let Some(inner) = inner {
            value = inner;
        }
        Ok(serde_json::from_value(value)?)
    }

    pub async fn load(path: &std::path::Path) -> Result<Self, KillchainError> {
        if !path.exists() {
            return Err(KillchainError::InvalidInput(format!(
                "Scan bundle not found: {}",
                path.display()
            )));
        }
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&content)
    }

    /// Top-level port list followed by every per-host list.
    pub fn ports(&self) -> Vec<PortRecord> {
        self.nmap
            .ports
            .iter()
            .chain(self.nmap.hosts.iter().flat_map(|h| h.ports.iter()))
            .cloned()
            .collect()
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.crawl.pages
    }

    pub fn alerts(&self) -> &[AlertRecord] {
        &self.zap.alerts
    }
}
