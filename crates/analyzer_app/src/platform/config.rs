use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use analyzer_engine::TransportSettings;
use engine_logging::engine_info;
use serde::Deserialize;
use thiserror::Error;

pub const BASE_URL_ENV: &str = "DOC_ANALYZER_BASE_URL";
pub const CONFIG_FILENAME: &str = "analyzer.ron";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The only recognised option is where the analysis service lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings::with_base_url(self.base_url.clone())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Environment variable, then `analyzer.ron` in `dir`, then the default.
pub fn load(dir: &Path) -> Result<AppConfig, ConfigError> {
    let from_file = load_file(dir)?;
    let config = resolve(std::env::var(BASE_URL_ENV).ok(), from_file);
    engine_info!("Using analysis service at {}", config.base_url);
    Ok(config)
}

fn load_file(dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path,
            message: err.to_string(),
        })
}

fn resolve(env_base_url: Option<String>, from_file: Option<AppConfig>) -> AppConfig {
    match env_base_url.map(|url| url.trim().to_string()) {
        Some(base_url) if !base_url.is_empty() => AppConfig { base_url },
        _ => from_file.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();

        assert_eq!(load_file(temp.path()).unwrap(), None);
        assert_eq!(resolve(None, None).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn reads_base_url_from_ron_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"(base_url: "https://analyzer.internal:9000")"#,
        )
        .unwrap();

        let config = load_file(temp.path()).unwrap();

        assert_eq!(
            config,
            Some(AppConfig {
                base_url: "https://analyzer.internal:9000".to_string()
            })
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"(base_url: "http://a", timeout: 5)"#,
        )
        .unwrap();

        let err = load_file(temp.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn environment_overrides_file() {
        let file = Some(AppConfig {
            base_url: "http://from-file".to_string(),
        });

        assert_eq!(
            resolve(Some(" http://from-env ".to_string()), file.clone()).base_url,
            "http://from-env"
        );
        assert_eq!(
            resolve(Some("   ".to_string()), file).base_url,
            "http://from-file"
        );
    }

    #[test]
    fn transport_settings_point_at_analyze_endpoint() {
        let settings = AppConfig::default().transport_settings();

        assert_eq!(
            settings.endpoint().unwrap().as_str(),
            "http://localhost:8000/analyze"
        );
    }
}
