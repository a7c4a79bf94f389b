use crate::error::{AdminError, Result};
use portfolio_common::remote::DEFAULT_KEY_HEADER;
use portfolio_common::{RemoteConfig, StorageMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "PORTFOLIO_API_KEY";
pub const REMOTE_URL_ENV: &str = "PORTFOLIO_REMOTE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub remote_url: Option<String>,
    pub api_key: Option<String>,
    pub key_header: String,
    /// ローカルストアのディレクトリ（未設定ならOSのデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    pub default_mode: StorageMode,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_url: None,
            api_key: None,
            key_header: DEFAULT_KEY_HEADER.to_string(),
            data_dir: None,
            default_mode: StorageMode::Local,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdminError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio-admin").join("config.json"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_local_dir()
            .ok_or_else(|| AdminError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("portfolio-admin"))
    }

    pub fn get_api_key(&self) -> Option<String> {
        // 環境変数を優先
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Some(key),
            _ => self.api_key.clone(),
        }
    }

    pub fn get_remote_url(&self) -> Option<String> {
        match std::env::var(REMOTE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Some(url),
            _ => self.remote_url.clone(),
        }
    }

    pub fn remote_config(&self) -> Result<RemoteConfig> {
        let url = self.get_remote_url().ok_or(AdminError::MissingRemoteUrl)?;
        let config = match self.get_api_key() {
            Some(key) => RemoteConfig::new(url, key),
            None => RemoteConfig::public(url),
        };
        Ok(config.with_key_header(self.key_header.clone()))
    }
}
