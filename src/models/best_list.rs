use serde::{Deserialize, Serialize};

use crate::models::chart::ChartRecord;
use crate::utils::error::AppResult;

/// 固定容量的最佳成绩列表 (B35/B15)
///
/// 内部始终保持按排序键降序排列，排序键相同的记录按插入先后保持稳定。
/// 任何修改操作返回后 `data.len() <= size` 恒成立。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestList {
    data: Vec<ChartRecord>,
    size: usize,
}

impl BestList {
    /// 创建指定容量的空列表
    pub fn new(size: usize) -> Self {
        Self {
            data: Vec::new(),
            size,
        }
    }

    /// 插入一条成绩。
    ///
    /// 列表已满且新记录的排序键不严格大于当前最低者时直接丢弃，
    /// 与最低者打平不会挤掉它。该快速拒绝让刷新期间绝大多数
    /// 低分记录走 O(1) 路径，不进入有序插入。
    pub fn push(&mut self, record: ChartRecord) {
        if self.data.len() >= self.size {
            match self.data.last() {
                Some(last) if record.rank_key() <= last.rank_key() => return,
                Some(_) => {}
                None => return, // 容量为 0
            }
        }
        let pos = self
            .data
            .partition_point(|r| r.rank_key() >= record.rank_key());
        self.data.insert(pos, record);
        self.data.truncate(self.size);
    }

    /// 移除当前排名最低的记录，空列表时不做任何事
    pub fn pop(&mut self) {
        self.data.pop();
    }

    /// 列表内所有记录的 Rating 总和
    pub fn total_rating(&self) -> i32 {
        self.data.iter().map(|r| r.ra).sum()
    }

    /// 按当前排序返回只读视图
    pub fn all_data(&self) -> &[ChartRecord] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 编码为 JSON 负载，供持久化使用
    pub fn to_payload(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 从 JSON 负载还原列表，容量以调用方传入的 `size` 为准。
    ///
    /// 负载中的记录数超出容量视为数据损坏：保留排序键最高的 `size` 条，
    /// 并通过返回值第二项告知调用方发生了截断；解码失败则整个调用返回错误。
    pub fn from_payload(payload: &str, size: usize) -> AppResult<(Self, bool)> {
        let mut list: BestList = serde_json::from_str(payload)?;
        list.size = size;
        let truncated = list.data.len() > size;
        if truncated {
            log::warn!(
                "持久化列表记录数 {} 超出容量 {}，按排序键截断",
                list.data.len(),
                size
            );
        }
        // 不信任外部负载的顺序，重建排序不变量（稳定排序保留同键相对顺序）
        list.data.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
        list.data.truncate(size);
        Ok((list, truncated))
    }
}
