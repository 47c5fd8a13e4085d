//! maimai DX Rating 计算核心。
//!
//! 把查分器返回的单曲成绩换算成整数 Rating，聚合出旧版本 B35 与
//! 新版本 B15 两份定容最佳列表，支持列表的持久化往返，以及按
//! 社区拟合定数重算的"参考 Rating"视图。
//! 网络抓取、绑定鉴权、图片与界面展示都不在本库职责内。

pub mod models;
pub mod services;
pub mod utils;

pub use models::best_list::BestList;
pub use models::chart::{ChartRecord, RawChartRecord};
pub use utils::error::{AppError, AppResult};
pub use utils::rating_utils::calculate_chart_rating;
