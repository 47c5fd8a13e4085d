use serde_json::Value;

use crate::models::chart::{ChartRecord, RawChartRecord};
use crate::models::fit_constant::{get_fit_constant, FitConstantMap};
use crate::utils::rating_utils::calculate_chart_rating;

// --- 成绩批量评分 ---

/// 把一批上游原始成绩转换为谱面成绩记录。
/// 单条记录解析失败只跳过该条并记录日志，不影响批次里的其他记录。
pub fn score_records(values: &[Value]) -> Vec<ChartRecord> {
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0usize;

    for (index, value) in values.iter().enumerate() {
        match serde_json::from_value::<RawChartRecord>(value.clone()) {
            Ok(raw) => records.push(ChartRecord::from_raw(&raw)),
            Err(e) => {
                skipped += 1;
                log::warn!("跳过第 {} 条无效成绩记录: {}", index + 1, e);
            }
        }
    }

    if skipped > 0 {
        log::info!("本批次共 {} 条记录，跳过 {} 条", values.len(), skipped);
    }
    records
}

// --- 拟合定数重算 ---

/// 按拟合定数重算单条成绩的 Rating。
///
/// 拟合表中找不到对应谱面时原样返回记录里冻结的 `ra`。
/// 纯投影，绝不修改传入的记录本身。
pub fn modified_rating(record: &ChartRecord, fits: &FitConstantMap) -> i32 {
    match get_fit_constant(fits, record.song_id, &record.level) {
        Some(fit_ds) => calculate_chart_rating(fit_ds, record.achievement),
        None => record.ra,
    }
}

/// 一组成绩按拟合定数重算后的 Rating 总和
pub fn modified_total_rating(records: &[ChartRecord], fits: &FitConstantMap) -> i32 {
    records.iter().map(|r| modified_rating(r, fits)).sum()
}
