//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./.appointly/appointments.json";

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_validate_time_range() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// 予約を保存するJSONファイルのパス（`~` は展開される）
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// `starts_at < ends_at` を検証するかどうか
    #[serde(default = "default_validate_time_range")]
    pub validate_time_range: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            validate_time_range: default_validate_time_range(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// 設定ファイルが存在しない場合はデフォルト値を返す
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file found at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `~` を展開した保存先パス
    pub fn expanded_store_path(&self) -> String {
        shellexpand::tilde(&self.store_path).into_owned()
    }
}
