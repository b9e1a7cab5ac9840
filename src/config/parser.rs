use std::path::Path;
use crate::errors::KillchainError;
use super::types::KillchainConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<KillchainConfig, KillchainError> {
    if !path.exists() {
        return Err(KillchainError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(KillchainError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<KillchainConfig, KillchainError> {
    // An empty file is a valid, all-defaults config
    if content.trim().is_empty() {
        return Ok(KillchainConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    validate_schema(&yaml)?;

    let config: KillchainConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema. Violations are reported as
/// warnings; typed parsing and semantic checks decide what is fatal.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), KillchainError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| KillchainError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| KillchainError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

fn validate_semantics(config: &KillchainConfig) -> Result<(), KillchainError> {
    if let Some(limits) = &config.limits {
        for (name, value) in [
            ("max_ports", limits.max_ports),
            ("max_pages", limits.max_pages),
            ("max_alerts", limits.max_alerts),
        ] {
            if value == Some(0) {
                return Err(KillchainError::Config(format!(
                    "limits.{} must be at least 1",
                    name
                )));
            }
        }
    }

    if let Some(output) = &config.output {
        if output.directory.as_deref().map_or(false, |d| d.trim().is_empty()) {
            return Err(KillchainError::Config("output.directory must not be empty".into()));
        }
        if output.include_graph && output.directory.is_none() {
            warn!("Graph export requested but no output directory configured; the CLI default will be used");
        }
    }

    Ok(())
}
