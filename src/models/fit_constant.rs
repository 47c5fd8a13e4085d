use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// fitConstant.json 中单张谱面的拟合定数条目
/// `fit_diff` 缺失的条目视为该谱面暂无拟合数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitChartEntry {
    pub diff: String,
    pub fit_diff: Option<f64>,
}

/// 歌曲ID(字符串) -> 各难度拟合定数条目
pub type FitConstantMap = HashMap<String, Vec<FitChartEntry>>;

/// fitConstant.json 的顶层结构
#[derive(Debug, Clone, Deserialize)]
pub struct FitConstantFile {
    pub charts: FitConstantMap,
}

/// 查询指定谱面的拟合定数，按难度等级标签匹配。
/// 没有对应条目、或条目缺少 `fit_diff` 时返回 None。
pub fn get_fit_constant(fits: &FitConstantMap, song_id: i64, level: &str) -> Option<f64> {
    fits.get(&song_id.to_string())
        .and_then(|entries| entries.iter().find(|e| e.diff == level))
        .and_then(|e| e.fit_diff)
}
