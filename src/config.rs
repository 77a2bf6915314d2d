use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub verbose: bool,
}

/// On-disk locations used by one invocation.
#[derive(Debug, Clone)]
pub struct Paths {
    pub creds: PathBuf,
    pub config: PathBuf,
    pub profiles_dir: PathBuf,
}

impl Paths {
    pub fn from_home() -> Result<Self, AppError> {
        let home = dirs::home_dir().ok_or_else(|| {
            AppError::InvalidInput("Could not determine the home directory".into())
        })?;
        Ok(Self::under(&home))
    }

    pub fn under(dir: &Path) -> Self {
        Self {
            creds: dir.join(".hue.creds"),
            config: dir.join(".hue.config"),
            profiles_dir: dir.join(".hue.profiles"),
        }
    }

    pub fn profile(&self, name: &str) -> PathBuf {
        self.profiles_dir.join(name)
    }
}

/// How to reach the bridge, from the optional `~/.hue.config` file.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    pub hostname: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    80
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            hostname: "philips-hue".into(),
            port: 80,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    default: BridgeConfig,
}

impl BridgeConfig {
    /// Read the config file if present; otherwise use built-in defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&raw)?;
        Ok(file.default)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.hostname, self.port)
    }
}
