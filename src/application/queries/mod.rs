pub mod history;
pub mod home;
pub mod orders;

pub use history::{history_report, HistoryReport};
pub use home::{home_summary, HomeSummary};
pub use orders::{filter_orders, StatusFilter};
