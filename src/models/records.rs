use serde::{Deserialize, Serialize};

use super::lenient;

/// One port/service line reported by the port scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    #[serde(default, deserialize_with = "lenient::port")]
    pub port: Option<u32>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub protocol: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub service: Option<String>,
}

impl PortRecord {
    pub fn new(port: u32, state: &str, service: &str) -> Self {
        Self {
            port: Some(port),
            protocol: Some("tcp".to_string()),
            state: Some(state.to_string()),
            service: Some(service.to_string()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state
            .as_deref()
            .map_or(false, |s| s.eq_ignore_ascii_case("open"))
    }
}

/// A page visited by the crawler. Title and links are carried for
/// completeness but play no part in graph construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::records")]
    pub links: Vec<String>,
}

impl PageRecord {
    pub fn new(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }
}

/// An alert raised by the web vulnerability scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, rename = "pluginId", deserialize_with = "lenient::string")]
    pub plugin_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub alert: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub risk: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

impl AlertRecord {
    /// Scanner identifier, preferring the per-instance id over the plugin id.
    pub fn identifier(&self) -> Option<&str> {
        non_empty(&self.id).or_else(|| non_empty(&self.plugin_id))
    }

    /// Display name: `alert`, then `name`.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.alert).or_else(|| non_empty(&self.name))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
