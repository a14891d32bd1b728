use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Standard rullende vinduer (sekunder): 3s, 10s og 60s effekt.
pub const DEFAULT_WINDOWS: [usize; 3] = [3, 10, 60];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Delstreng som markerer en notifikasjon i loggen.
    pub notify_marker: String,
    /// Karakteristikk-ID (4 hex-siffer), skrives som `(1234)` i loggen.
    pub characteristic: String,
    pub windows: Vec<usize>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            notify_marker: "notified".to_string(),
            characteristic: "1234".to_string(),
            windows: DEFAULT_WINDOWS.to_vec(),
        }
    }
}

impl LogConfig {
    /// Markøren slik den faktisk står i linja, f.eks. `(1234)`.
    pub fn characteristic_marker(&self) -> String {
        format!("({})", self.characteristic)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notify_marker.is_empty() {
            return Err(ConfigError::Invalid("notify_marker must not be empty".into()));
        }
        if self.characteristic.len() != 4
            || !self.characteristic.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(format!(
                "characteristic must be 4 hex digits, got {:?}",
                self.characteristic
            )));
        }
        if self.windows.is_empty() {
            return Err(ConfigError::Invalid("at least one rolling window is required".into()));
        }
        if self.windows.contains(&0) {
            return Err(ConfigError::Invalid("rolling windows must be >= 1".into()));
        }
        Ok(())
    }
}

/// Leser inn konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_config(path: impl AsRef<Path>) -> Result<LogConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("no config at {}, using defaults", path.display());
        return Ok(LogConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let mut de = serde_json::Deserializer::from_str(&contents);
    let cfg: LogConfig = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        ConfigError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })?;
    cfg.validate()?;

    log::info!(
        "config loaded from {} (characteristic={}, windows={:?})",
        path.display(),
        cfg.characteristic,
        cfg.windows
    );
    Ok(cfg)
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &LogConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(cfg).map_err(|e| ConfigError::Parse {
        path: ".".into(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json)?;
    Ok(())
}
