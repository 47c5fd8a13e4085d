use lazy_static::lazy_static;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::fit_constant::{FitConstantFile, FitConstantMap};
use crate::utils::error::AppResult;

// --- 辅助函数：从环境变量获取路径，如果未设置则使用默认值 ---
fn get_data_path(env_var: &str, default_value: &str) -> PathBuf {
    env::var(env_var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default_value))
}

lazy_static! {
    // 获取基础数据路径，默认为 "info"
    static ref INFO_DATA_PATH_BUF: PathBuf = get_data_path("INFO_DATA_PATH", "info");

    // 拟合定数文件路径
    static ref FIT_CONSTANT_FILE_PATH: PathBuf = INFO_DATA_PATH_BUF.join(
        env::var("FIT_CONSTANT_FILE").unwrap_or_else(|_| "fitConstant.json".to_string())
    );

    /// 全局拟合定数表。加载失败时降级为空表，查询方一律视为"无拟合数据"。
    pub static ref FIT_CONSTANTS: Arc<FitConstantMap> = Arc::new({
        match load_fit_constants(&FIT_CONSTANT_FILE_PATH) {
            Ok(fits) => {
                log::info!("已加载 {} 首歌曲的拟合定数", fits.len());
                fits
            }
            Err(e) => {
                log::error!("加载拟合定数失败: {}", e);
                FitConstantMap::new()
            }
        }
    });
}

/// 加载拟合定数表。调用方也可以用它从任意路径显式加载，
/// 再把结果作为参数传给评分接口。
pub fn load_fit_constants(path: &Path) -> AppResult<FitConstantMap> {
    log::debug!("正在加载拟合定数，路径: {}", path.display());
    let content = fs::read_to_string(path)?;
    let file: FitConstantFile = serde_json::from_str(&content)?;
    log::debug!("拟合定数加载完成，共 {} 首歌曲", file.charts.len());
    Ok(file.charts)
}

/// 查询全局拟合定数表里指定谱面的拟合定数
pub fn get_global_fit_constant(song_id: i64, level: &str) -> Option<f64> {
    crate::models::fit_constant::get_fit_constant(&FIT_CONSTANTS, song_id, level)
}
