pub mod b50;
pub mod best_list;
pub mod chart;
pub mod fit_constant;

pub use b50::*;
pub use best_list::*;
pub use chart::*;
pub use fit_constant::*;
