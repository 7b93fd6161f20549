use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::errors::AppError;
use crate::sources::DEFAULT_SOURCES;

/// URL template expanded per source and index; `{source}` and `{index}`
/// are the only recognized placeholders.
pub const DEFAULT_URL_TEMPLATE: &str = "https://{source}/nfs/premium{index}/mono.m3u8";

/// Upstream servers gate responses by client identity, so probes identify
/// as a smart-TV browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (SMART-TV; Linux; Tizen 6.0) AppleWebKit/537.36 (KHTML, like Gecko) TV SamsungBrowser/2.1 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub probe: ProbeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Hostnames probed in order
    pub sources: Vec<String>,
    /// Upper bound of the per-source index range (inclusive, from 1)
    pub max_index: u32,
    /// Number of candidates probed at a time; 1 reproduces the strictly
    /// sequential reference behavior
    pub concurrency: usize,
    pub url_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub referer: Option<String>,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub playlist_path: PathBuf,
    pub error_log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig {
                sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
                max_index: 999,
                concurrency: 1,
                url_template: DEFAULT_URL_TEMPLATE.to_string(),
            },
            probe: ProbeConfig {
                timeout_secs: 12,
                user_agent: DEFAULT_USER_AGENT.to_string(),
                referer: None,
            },
            output: OutputConfig {
                playlist_path: PathBuf::from("direct_playlist.m3u8"),
                error_log_path: PathBuf::from("scan_errors.log"),
            },
        }
    }
}

impl Config {
    /// Load configuration from the given file, writing the defaults out if
    /// the file does not exist yet
    pub fn load(path: &str) -> Result<Self> {
        if std::path::Path::new(path).exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(path, contents)?;
            Ok(default_config)
        }
    }

    /// Validate the settings that would otherwise only fail mid-scan
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.scan.url_template.contains("{source}") {
            return Err(AppError::configuration(
                "url_template is missing the {source} placeholder",
            ));
        }
        if !self.scan.url_template.contains("{index}") {
            return Err(AppError::configuration(
                "url_template is missing the {index} placeholder",
            ));
        }

        // A malformed template should fail here, not mid-scan
        let sample = self
            .scan
            .url_template
            .replace("{source}", "example.test")
            .replace("{index}", "1");
        let parsed = Url::parse(&sample).map_err(|e| {
            AppError::configuration(format!("url_template expands to an invalid URL: {}", e))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::configuration(
                "url_template must use HTTP or HTTPS protocol",
            ));
        }

        if self.probe.timeout_secs == 0 {
            return Err(AppError::configuration(
                "probe timeout must be at least 1 second",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert_eq!(config.scan.max_index, 999);
        assert_eq!(config.scan.concurrency, 1);
        assert_eq!(config.probe.timeout_secs, 12);
        assert_eq!(config.probe.timeout(), Duration::from_secs(12));
        assert!(config.probe.referer.is_none());
        assert_eq!(
            config.output.playlist_path,
            PathBuf::from("direct_playlist.m3u8")
        );
        assert_eq!(config.output.error_log_path, PathBuf::from("scan_errors.log"));
        assert!(!config.scan.sources.is_empty());

        config.validate().expect("default config should validate");
    }

    #[test]
    fn test_validate_rejects_missing_placeholder() {
        let mut config = Config::default();
        config.scan.url_template = "https://{source}/nfs/premium/mono.m3u8".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.scan.url_template = "ftp://{source}/premium{index}".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.probe.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parses_from_toml() {
        let toml_str = r#"
            [scan]
            sources = ["one.example", "two.example"]
            max_index = 10
            concurrency = 4
            url_template = "http://{source}/nfs/premium{index}/mono.m3u8"

            [probe]
            timeout_secs = 3
            user_agent = "test-agent"
            referer = "https://player.example/"

            [output]
            playlist_path = "out.m3u8"
            error_log_path = "errors.log"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scan.sources.len(), 2);
        assert_eq!(config.scan.max_index, 10);
        assert_eq!(config.scan.concurrency, 4);
        assert_eq!(config.probe.referer.as_deref(), Some("https://player.example/"));
    }
}
