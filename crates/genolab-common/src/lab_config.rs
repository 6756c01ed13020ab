//! Runtime configuration for the GenoLab binaries.
//!
//! Read from `genolab.toml` in the working directory, the path in the
//! `GENOLAB_CONFIG` env var, or an explicit `--config` path. YAML and JSON
//! files are accepted as well, chosen by extension. Every field has a default,
//! so an empty file (or no file at all) yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::entities::MetabolizerEffect;
use crate::error::{GenolabError, Result};

pub const CONFIG_ENV: &str = "GENOLAB_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "genolab.toml";

/// Complete lab configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub attention: AttentionConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub pharmacogenomics: PharmacoConfig,
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Defaults ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Sequence used when a caller does not supply one.
    #[serde(default = "default_sequence")]
    pub sequence: String,
}

fn default_sequence() -> String { "ATGCGTACGTTAGCAGC".to_string() }

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { sequence: default_sequence() }
    }
}

// ── Attention map ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttentionConfig {
    /// Fixed seed for reproducible weights; unseeded when absent.
    pub seed: Option<u64>,
}

// ── Classifier ────────────────────────────────────────────────────────────────

/// Thresholds and scores for the three-tier classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_length_ratio")]
    pub pathogenic_length_ratio: f64,

    #[serde(default = "default_benign_score")]
    pub benign_score: f64,

    #[serde(default = "default_vus_score")]
    pub vus_score: f64,

    #[serde(default = "default_pathogenic_score")]
    pub pathogenic_score: f64,
}

fn default_length_ratio() -> f64 { 0.8 }
fn default_benign_score() -> f64 { 0.05 }
fn default_vus_score() -> f64 { 0.45 }
fn default_pathogenic_score() -> f64 { 0.95 }

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pathogenic_length_ratio: default_length_ratio(),
            benign_score: default_benign_score(),
            vus_score: default_vus_score(),
            pathogenic_score: default_pathogenic_score(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.pathogenic_length_ratio > 0.0 && self.pathogenic_length_ratio <= 1.0) {
            return Err(GenolabError::Config(format!(
                "classifier.pathogenic_length_ratio must be in (0, 1], got {}",
                self.pathogenic_length_ratio
            )));
        }
        for (name, score) in [
            ("benign_score", self.benign_score),
            ("vus_score", self.vus_score),
            ("pathogenic_score", self.pathogenic_score),
        ] {
            if !(0.0..=1.0).contains(&score) {
                return Err(GenolabError::Config(format!(
                    "classifier.{name} must be in [0, 1], got {score}"
                )));
            }
        }
        Ok(())
    }
}

// ── Pharmacogenomics ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PharmacoConfig {
    /// Extra markers layered over the built-in table.
    #[serde(default)]
    pub markers: Vec<MarkerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// One-letter amino-acid code.
    pub marker: char,
    pub drug: String,
    pub effect: MetabolizerEffect,
    pub advice: String,
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl LabConfig {
    /// Resolve and load the configuration.
    ///
    /// An explicit path or `GENOLAB_CONFIG` must point at an existing file.
    /// The implicit `genolab.toml` is optional; built-in defaults are used
    /// when it is missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_resolved(explicit, from_env)
    }

    /// `load` with the `GENOLAB_CONFIG` value passed in rather than read
    /// from the process environment.
    pub(crate) fn load_resolved(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Result<Self> {
        let requested: Option<PathBuf> = explicit.map(Path::to_path_buf).or(from_env);

        let config = match requested {
            Some(path) => {
                if !path.exists() {
                    return Err(GenolabError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_path(&path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_path(path)?
                } else {
                    warn!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from a file, picking the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(path)?,
            Some("json") => Self::from_json(path)?,
            _ => Self::from_toml(path)?,
        };
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    pub fn from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_yaml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn from_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save as YAML.
    pub fn to_yaml(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GenolabError::Config("server.port must be non-zero".to_string()));
        }
        self.classifier.validate()?;
        for m in &self.pharmacogenomics.markers {
            if !m.marker.is_ascii_uppercase() {
                return Err(GenolabError::Config(format!(
                    "pharmacogenomics marker '{}' must be an uppercase one-letter amino-acid code",
                    m.marker
                )));
            }
            if m.drug.trim().is_empty() {
                return Err(GenolabError::Config(format!(
                    "pharmacogenomics marker '{}' has an empty drug name",
                    m.marker
                )));
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LabConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:3001");
        assert_eq!(config.defaults.sequence, "ATGCGTACGTTAGCAGC");
        assert!(config.attention.seed.is_none());
        assert!((config.classifier.pathogenic_length_ratio - 0.8).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: LabConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [attention]
            seed = 7

            [[pharmacogenomics.markers]]
            marker = "K"
            drug = "Tamoxifen"
            effect = "Poor"
            advice = "Consider aromatase inhibitor."
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.attention.seed, Some(7));
        assert_eq!(config.pharmacogenomics.markers.len(), 1);
        assert_eq!(config.pharmacogenomics.markers[0].marker, 'K');
        assert_eq!(config.pharmacogenomics.markers[0].effect, MetabolizerEffect::Poor);
        assert!((config.classifier.vus_score - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let mut config = LabConfig::default();
        config.classifier.pathogenic_length_ratio = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pathogenic_length_ratio"));
    }

    #[test]
    fn test_validate_rejects_lowercase_marker() {
        let mut config = LabConfig::default();
        config.pharmacogenomics.markers.push(MarkerConfig {
            marker: 'k',
            drug: "Tamoxifen".to_string(),
            effect: MetabolizerEffect::Poor,
            advice: String::new(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = LabConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(GenolabError::Config(_))));
    }

    #[test]
    fn test_load_explicit_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[defaults]\nsequence = \"ATGGTG\"").unwrap();
        let config = LabConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.sequence, "ATGGTG");
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let err = LabConfig::load(Some(Path::new("/nonexistent/genolab.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_env_path_is_used() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 4100").unwrap();
        let config = LabConfig::load_resolved(None, Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.server.port, 4100);
    }

    #[test]
    fn test_env_path_missing_is_error() {
        let err = LabConfig::load_resolved(None, Some(PathBuf::from("/nonexistent/typo.toml")))
            .unwrap_err();
        assert!(matches!(err, GenolabError::Config(_)));
        assert!(err.to_string().contains("/nonexistent/typo.toml"));
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 4200").unwrap();
        let config = LabConfig::load_resolved(
            Some(file.path()),
            Some(PathBuf::from("/nonexistent/typo.toml")),
        )
        .unwrap();
        assert_eq!(config.server.port, 4200);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[classifier]\npathogenic_length_ratio = 1.5").unwrap();
        let err = LabConfig::load_resolved(None, Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("pathogenic_length_ratio"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genolab.yaml");
        let mut config = LabConfig::default();
        config.attention.seed = Some(99);
        config.to_yaml(&path).unwrap();
        let parsed = LabConfig::from_path(&path).unwrap();
        assert_eq!(parsed.attention.seed, Some(99));
        assert_eq!(parsed.server.port, config.server.port);
    }

    #[test]
    fn test_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"server": {{"port": 9000}}}}"#).unwrap();
        let config = LabConfig::from_path(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
    }
}
