// --- 单曲 Rating 计算 ---

/// 按达成率选择基础系数。
/// 区间按升序逐段判断，取第一个满足的上界（左闭右开的阶梯函数，不做插值）。
fn base_coefficient(achievement: f64) -> f64 {
    match achievement {
        a if a < 50.0 => 7.0,
        a if a < 60.0 => 8.0,
        a if a < 70.0 => 9.6,
        a if a < 75.0 => 11.2,
        a if a < 80.0 => 12.0,
        a if a < 90.0 => 13.6,
        a if a < 94.0 => 15.2,
        a if a < 97.0 => 16.8,
        a if a < 98.0 => 20.0,
        a if a < 99.0 => 20.3,
        a if a < 99.5 => 20.8,
        a if a < 100.0 => 21.1,
        a if a < 100.5 => 21.6,
        _ => 22.4,
    }
}

/// 计算单张谱面的 Rating 值。
///
/// 达成率上限按 100.5%（SSS+ 封顶）截断，不设下限；
/// 结果 `floor(定数 × 达成率/100 × 基础系数)` 向下取整。
/// 取整方式与原版一致，差一分也算错。
pub fn calculate_chart_rating(ds: f64, achievement: f64) -> i32 {
    let base_ra = base_coefficient(achievement);
    (ds * (achievement.min(100.5) / 100.0) * base_ra).floor() as i32
}
