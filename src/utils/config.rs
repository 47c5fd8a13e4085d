use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::utils::error::{AppError, AppResult};

/// B35 默认容量（旧版本曲目池）
pub const DEFAULT_SD_BEST_SIZE: usize = 35;
/// B15 默认容量（新版本曲目池）
pub const DEFAULT_DX_BEST_SIZE: usize = 15;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub info_data_path: String,
    pub fit_constant_file: String,
    pub sd_best_size: usize,
    pub dx_best_size: usize,
    pub sd_list_file: String,
    pub dx_list_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            info_data_path: "info".to_string(),
            fit_constant_file: "fitConstant.json".to_string(),
            sd_best_size: DEFAULT_SD_BEST_SIZE,
            dx_best_size: DEFAULT_DX_BEST_SIZE,
            sd_list_file: "sdBestList.json".to_string(),
            dx_list_file: "dxBestList.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let info_data_path =
            std::env::var("INFO_DATA_PATH").unwrap_or(defaults.info_data_path);
        let fit_constant_file =
            std::env::var("FIT_CONSTANT_FILE").unwrap_or(defaults.fit_constant_file);
        let sd_best_size = std::env::var("SD_BEST_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SD_BEST_SIZE);
        let dx_best_size = std::env::var("DX_BEST_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DX_BEST_SIZE);
        let sd_list_file = std::env::var("SD_LIST_FILE").unwrap_or(defaults.sd_list_file);
        let dx_list_file = std::env::var("DX_LIST_FILE").unwrap_or(defaults.dx_list_file);
        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);

        Self {
            info_data_path,
            fit_constant_file,
            sd_best_size,
            dx_best_size,
            sd_list_file,
            dx_list_file,
            log_level,
        }
    }

    #[allow(dead_code)]
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path)
            .map_err(|e| AppError::ConfigError(format!("无法打开配置文件: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| AppError::ConfigError(format!("读取配置文件失败: {e}")))?;

        serde_json::from_str(&contents)
            .map_err(|e| AppError::ConfigError(format!("解析配置文件失败: {e}")))
    }
}
