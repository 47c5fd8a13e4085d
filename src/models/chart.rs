use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::utils::rating_utils::calculate_chart_rating;

/// 评级字符串表，从最差到最好
pub const RATE_RANKS: [&str; 14] = [
    "d", "c", "b", "bb", "bbb", "a", "aa", "aaa", "s", "sp", "ss", "ssp", "sss", "sssp",
];

/// Combo 标记字符串表，从最差到最好
pub const FC_RANKS: [&str; 5] = ["none", "fc", "fc+", "ap", "ap+"];

/// 上游查分接口返回的单条原始成绩记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawChartRecord {
    pub song_id: i64,
    pub level_index: u8,
    pub achievements: f64,
    pub ds: f64,
    pub level: String,
    pub rate: String,
    pub fc: String,
    #[serde(rename = "type")]
    pub chart_type: String,
    pub title: String,
}

/// 谱面成绩记录结构体
/// 包含单张谱面的成绩与计算好的 Rating 信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRecord {
    /// 歌曲ID
    pub song_id: i64,
    /// 难度索引 (0-4: Basic/Advanced/Expert/Master/Re:Master，>=5 由调用方按宴谱处理)
    pub level_index: u8,
    /// 谱面类型 ("SD" 或 "DX")，仅透传
    pub chart_type: String,
    /// 达成率 (0.0-101.0000)
    pub achievement: f64,
    /// 谱面定数
    pub ds: f64,
    /// 难度等级标签 (如 "13+")，仅透传
    pub level: String,
    /// Rating 值，构造时经公式算出后即冻结，不会被隐式重算
    pub ra: i32,
    /// 歌曲名称
    pub title: String,
    /// 评级序号 (rate 在评级表中的位置，越大越好)
    pub rate_rank: u8,
    /// Combo 序号 (fc 在标记表中的位置，越大越好)
    pub fc_rank: u8,
}

impl ChartRecord {
    /// 由原始成绩记录构造谱面成绩。
    /// 评级/Combo 字符串不在表中时序号取 0（兼容上游新增的未知取值）。
    pub fn from_raw(raw: &RawChartRecord) -> Self {
        let rate_rank = RATE_RANKS
            .iter()
            .position(|&r| r == raw.rate)
            .unwrap_or(0) as u8;
        let fc_rank = FC_RANKS.iter().position(|&f| f == raw.fc).unwrap_or(0) as u8;

        Self {
            song_id: raw.song_id,
            level_index: raw.level_index,
            chart_type: raw.chart_type.clone(),
            achievement: raw.achievements,
            ds: raw.ds,
            level: raw.level.clone(),
            ra: calculate_chart_rating(raw.ds, raw.achievements),
            title: raw.title.clone(),
            rate_rank,
            fc_rank,
        }
    }

    /// 排序键: Rating 优先，相同时依次比较评级序号、Combo 序号
    pub fn rank_key(&self) -> (i32, u8, u8) {
        (self.ra, self.rate_rank, self.fc_rank)
    }
}

impl PartialEq for ChartRecord {
    fn eq(&self, other: &Self) -> bool {
        self.rank_key() == other.rank_key()
    }
}

impl Eq for ChartRecord {}

impl PartialOrd for ChartRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChartRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

/// 难度索引对应的显示名称
pub fn difficulty_name(level_index: u8) -> &'static str {
    match level_index {
        0 => "Basic",
        1 => "Advanced",
        2 => "Expert",
        3 => "Master",
        4 => "Re:Master",
        _ => "Utage",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rate: &str, fc: &str) -> RawChartRecord {
        RawChartRecord {
            song_id: 834,
            level_index: 3,
            achievements: 100.5,
            ds: 14.0,
            level: "14".to_string(),
            rate: rate.to_string(),
            fc: fc.to_string(),
            chart_type: "DX".to_string(),
            title: "测试歌曲".to_string(),
        }
    }

    #[test]
    fn test_from_raw_populates_rating_and_ranks() {
        let record = ChartRecord::from_raw(&raw("sssp", "ap+"));
        assert_eq!(record.ra, 315);
        assert_eq!(record.rate_rank, 13);
        assert_eq!(record.fc_rank, 4);
        assert_eq!(record.chart_type, "DX");
    }

    #[test]
    fn test_unknown_rate_and_fc_fall_back_to_zero() {
        let record = ChartRecord::from_raw(&raw("ultima", "gfc"));
        assert_eq!(record.rate_rank, 0);
        assert_eq!(record.fc_rank, 0);
    }

    #[test]
    fn test_rank_key_ordering() {
        let a = ChartRecord::from_raw(&raw("sss", "fc"));
        let b = ChartRecord::from_raw(&raw("sss", "ap"));
        // Rating 相同时 Combo 序号更高者更大
        assert_eq!(a.ra, b.ra);
        assert!(b > a);
    }
}
