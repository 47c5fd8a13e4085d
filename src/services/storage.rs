use std::fs;
use std::path::Path;

use crate::models::best_list::BestList;
use crate::utils::error::AppResult;

// --- 最佳列表持久化 ---
// 刷新成功后整份覆盖写入，启动时读回；任何读取失败都降级为
// 指定容量的空列表，绝不让宿主进程因此退出。

/// 把最佳列表写入指定文件
pub fn save_best_list<P: AsRef<Path>>(path: P, list: &BestList) -> AppResult<()> {
    let payload = list.to_payload()?;
    fs::write(path.as_ref(), payload)?;
    log::debug!(
        "已保存最佳列表到 {} ({} 条记录)",
        path.as_ref().display(),
        list.len()
    );
    Ok(())
}

/// 从指定文件读回最佳列表。
///
/// 文件不存在或解码失败时返回指定容量的空列表并记录警告；
/// 记录数超出容量时保留最高的一部分。调用方拿到的列表总是可用的。
pub fn load_best_list<P: AsRef<Path>>(path: P, size: usize) -> BestList {
    let path = path.as_ref();
    let payload = match fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("读取最佳列表 {} 失败，使用空列表: {}", path.display(), e);
            return BestList::new(size);
        }
    };

    match BestList::from_payload(&payload, size) {
        Ok((list, truncated)) => {
            if truncated {
                log::warn!("最佳列表 {} 超出容量，已截断保留最高记录", path.display());
            }
            list
        }
        Err(e) => {
            log::warn!("最佳列表 {} 数据损坏，使用空列表: {}", path.display(), e);
            BestList::new(size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chart::{ChartRecord, RawChartRecord};
    use std::env;
    use std::path::PathBuf;

    fn record(song_id: i64, achievement: f64) -> ChartRecord {
        ChartRecord::from_raw(&RawChartRecord {
            song_id,
            level_index: 2,
            achievements: achievement,
            ds: 13.0,
            level: "13".to_string(),
            rate: "ss".to_string(),
            fc: "fc".to_string(),
            chart_type: "SD".to_string(),
            title: format!("歌曲{song_id}"),
        })
    }

    fn temp_file(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("mai-rating-test-{}-{name}.json", std::process::id()));
        path
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_file("round-trip");
        let mut list = BestList::new(35);
        list.push(record(1, 100.0));
        list.push(record(2, 97.0));

        save_best_list(&path, &list).expect("保存失败");
        let restored = load_best_list(&path, 35);
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.total_rating(), list.total_rating());
        let ids: Vec<i64> = restored.all_data().iter().map(|r| r.song_id).collect();
        let orig: Vec<i64> = list.all_data().iter().map(|r| r.song_id).collect();
        assert_eq!(ids, orig);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back_to_empty() {
        let list = load_best_list(temp_file("不存在的文件"), 15);
        assert!(list.is_empty());
        assert_eq!(list.size(), 15);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let path = temp_file("corrupt");
        std::fs::write(&path, "{{{ 坏数据").expect("写入失败");

        let list = load_best_list(&path, 35);
        assert!(list.is_empty());
        assert_eq!(list.size(), 35);

        let _ = std::fs::remove_file(&path);
    }
}
