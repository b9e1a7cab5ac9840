pub mod batch;
pub mod commands;
pub mod graph;
pub mod paths;
pub mod report;

pub use commands::{Cli, Commands};

use crate::config::{parse_config, KillchainConfig};
use crate::errors::KillchainError;

pub const DEFAULT_OUTPUT_DIR: &str = "./killchain-reports";

/// Load the config at `path`, or defaults when none was given.
pub async fn load_config(path: Option<&str>) -> Result<KillchainConfig, KillchainError> {
    match path {
        Some(p) => parse_config(std::path::Path::new(p)).await,
        None => Ok(KillchainConfig::default()),
    }
}

/// Output directory: CLI flag, then config, then the default.
pub fn output_dir(flag: Option<&str>, config: &KillchainConfig) -> std::path::PathBuf {
    flag.map(str::to_string)
        .or_else(|| config.output.as_ref().and_then(|o| o.directory.clone()))
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
        .into()
}

/// Version banner with the commit, build profile and build time embedded by
/// `build.rs`.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("KILLCHAIN_GIT_HASH").unwrap_or("dev");
    let profile = env!("KILLCHAIN_BUILD_PROFILE");
    let build_ts = env!("KILLCHAIN_BUILD_TIMESTAMP");
    format!(
        "killchain {}\ncommit: {}\nprofile: {}\nbuilt: {}",
        version, git_hash, profile, build_ts
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_version_lines() {
        let banner = render_version();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("killchain {}", env!("CARGO_PKG_VERSION")));
        assert!(lines[1].starts_with("commit: "));
        assert!(lines[2].starts_with("profile: "));
        assert!(!lines[2].ends_with("unknown"));
        assert!(lines[3].starts_with("built: "));
    }

    #[test]
    fn test_output_dir_precedence() {
        let config = KillchainConfig::default();
        assert_eq!(output_dir(None, &config), std::path::PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(output_dir(Some("out"), &config), std::path::PathBuf::from("out"));
    }
}
