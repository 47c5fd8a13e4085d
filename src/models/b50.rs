use serde::{Deserialize, Serialize};

use crate::models::best_list::BestList;
use crate::models::fit_constant::FitConstantMap;
use crate::services::scorer;

/// B50 计算结果
/// 旧版本曲目池的 B35 与新版本曲目池的 B15
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct B50Result {
    /// 旧版本 (standard) 最佳列表，容量 35
    pub sd_best: BestList,
    /// 新版本 (deluxe) 最佳列表，容量 15
    pub dx_best: BestList,
}

impl B50Result {
    /// 两个列表的 Rating 总和
    pub fn total_rating(&self) -> i32 {
        self.sd_best.total_rating() + self.dx_best.total_rating()
    }

    /// 按拟合定数重算后的 Rating 总和。
    /// 只是展示用的投影，不会改动列表里冻结的 `ra`。
    pub fn modified_total_rating(&self, fits: &FitConstantMap) -> i32 {
        scorer::modified_total_rating(self.sd_best.all_data(), fits)
            + scorer::modified_total_rating(self.dx_best.all_data(), fits)
    }
}
