use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const MIN_FONT_SIZE: f32 = 8.0;
const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 600.0];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读写配置文件 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("配置文件格式错误 {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 外观配置（提示文字本身不可配置）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// 优先尝试的中文字体文件，找不到时再用内置列表
    pub font_paths: Vec<String>,
    pub message_font_size: f32,
    pub button_font_size: f32,
    pub window_size: [f32; 2],
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            font_paths: Vec::new(),
            message_font_size: 20.0,
            button_font_size: 18.0,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppearanceConfig {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("startup-error-dialog")
            .join("config.json")
    }

    /// 加载配置，任何问题都回退到默认值
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}，使用默认外观");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.message_font_size = self.message_font_size.max(MIN_FONT_SIZE);
        self.button_font_size = self.button_font_size.max(MIN_FONT_SIZE);
        // NaN 也走默认值
        if !self.window_size.iter().all(|v| *v > 0.0) {
            self.window_size = DEFAULT_WINDOW_SIZE;
        }
        self
    }
}
