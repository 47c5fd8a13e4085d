use serde_json::Value;

use crate::models::b50::B50Result;
use crate::models::best_list::BestList;
use crate::services::scorer;
use crate::utils::config::AppConfig;
use crate::utils::error::{AppError, AppResult};

/// 从已获取的查分器响应文档生成两份最佳列表。
///
/// 文档需包含 `charts.sd` 与 `charts.dx` 两个成绩数组（查分器返回的形状），
/// 缺了就整体算作格式错误。每次刷新都重新构建全新的列表，
/// 不在旧列表上增量修改。
pub fn generate_best_lists(
    document: &Value,
    sd_size: usize,
    dx_size: usize,
) -> AppResult<B50Result> {
    let charts = document
        .get("charts")
        .ok_or_else(|| AppError::BadRecordDocument("缺少 charts 字段".to_string()))?;
    let sd_values = chart_array(charts, "sd")?;
    let dx_values = chart_array(charts, "dx")?;

    let mut sd_best = BestList::new(sd_size);
    for record in scorer::score_records(sd_values) {
        sd_best.push(record);
    }

    let mut dx_best = BestList::new(dx_size);
    for record in scorer::score_records(dx_values) {
        dx_best.push(record);
    }

    let result = B50Result { sd_best, dx_best };
    log::info!("总Rating: {}", result.total_rating());
    log::info!("旧版本B{} Rating: {}", sd_size, result.sd_best.total_rating());
    log::info!("新版本B{} Rating: {}", dx_size, result.dx_best.total_rating());

    Ok(result)
}

/// 按配置里的容量生成最佳列表
pub fn generate_best_lists_with_config(
    document: &Value,
    config: &AppConfig,
) -> AppResult<B50Result> {
    generate_best_lists(document, config.sd_best_size, config.dx_best_size)
}

fn chart_array<'a>(charts: &'a Value, pool: &str) -> AppResult<&'a Vec<Value>> {
    charts
        .get(pool)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::BadRecordDocument(format!("charts.{pool} 不是成绩数组")))
}
