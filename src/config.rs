use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::reader::types::ReaderKind;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "VERSION_DETECT_CONFIG";

/// Detection configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectConfig {
    pub readers: ReadersConfig,
}

/// Reader-specific configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadersConfig {
    pub helm_chart: ReaderConfig,
    pub makefile: ReaderConfig,
    pub automake: ReaderConfig,
    pub cmake: ReaderConfig,
    pub python: ReaderConfig,
    pub maven_pom: ReaderConfig,
    pub js_package: ReaderConfig,
    pub gradle: ReaderConfig,
    pub csharp: ReaderConfig,
    pub csharp_project: ReaderConfig,
    pub version_file: ReaderConfig,
}

impl ReadersConfig {
    /// Returns the configuration of the reader handling `kind`
    pub fn get(&self, kind: ReaderKind) -> &ReaderConfig {
        match kind {
            ReaderKind::HelmChart => &self.helm_chart,
            ReaderKind::Makefile => &self.makefile,
            ReaderKind::Automake => &self.automake,
            ReaderKind::CMake => &self.cmake,
            ReaderKind::Python => &self.python,
            ReaderKind::MavenPom => &self.maven_pom,
            ReaderKind::JsPackage => &self.js_package,
            ReaderKind::Gradle => &self.gradle,
            ReaderKind::GlobalAssembly => &self.csharp,
            ReaderKind::CsharpProject => &self.csharp_project,
            ReaderKind::VersionFile => &self.version_file,
        }
    }

    pub fn is_enabled(&self, kind: ReaderKind) -> bool {
        self.get(kind).enabled
    }
}

/// Individual reader configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReaderConfig {
    pub enabled: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DetectConfig {
    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config from an explicit path, the environment, or fall back to defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        resolve_with_env(explicit, std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }
}

fn resolve_with_env(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
) -> Result<DetectConfig, ConfigError> {
    match explicit.map(Path::to_path_buf).or(env_path) {
        Some(path) => DetectConfig::load(&path),
        None => Ok(DetectConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn detect_config_from_empty_object_enables_every_reader() {
        let result = serde_json::from_value::<DetectConfig>(json!({})).unwrap();

        assert!(
            ReaderKind::ALL
                .into_iter()
                .all(|kind| result.readers.is_enabled(kind))
        );
    }

    #[test]
    fn detect_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<DetectConfig>(json!({
            "readers": {
                "gradle": { "enabled": false },
                "csharpProject": { "enabled": false }
            }
        }))
        .unwrap();

        assert!(!result.readers.is_enabled(ReaderKind::Gradle));
        assert!(!result.readers.is_enabled(ReaderKind::CsharpProject));
        assert!(result.readers.is_enabled(ReaderKind::HelmChart));
        assert!(result.readers.is_enabled(ReaderKind::GlobalAssembly));
    }

    #[test]
    fn load_reads_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version-detect.json");
        std::fs::write(&path, r#"{"readers": {"helmChart": {"enabled": false}}}"#).unwrap();

        let config = DetectConfig::load(&path).unwrap();

        assert!(!config.readers.is_enabled(ReaderKind::HelmChart));
    }

    #[test]
    fn load_reports_parse_error_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version-detect.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DetectConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { path: p, .. } if p == path));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = DetectConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn resolve_with_env_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("explicit.json");
        std::fs::write(&explicit, r#"{"readers": {"python": {"enabled": false}}}"#).unwrap();
        let env_path = temp_dir.path().join("does-not-exist.json");

        let config = resolve_with_env(Some(&explicit), Some(env_path)).unwrap();

        assert!(!config.readers.is_enabled(ReaderKind::Python));
    }

    #[test]
    fn resolve_with_env_falls_back_to_defaults() {
        let config = resolve_with_env(None, None).unwrap();
        assert_eq!(config, DetectConfig::default());
    }
}
