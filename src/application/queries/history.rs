use crate::domain::entities::Order;
use crate::domain::value_objects::OrderStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryReport {
    /// Terminal orders, most recently updated first.
    pub entries: Vec<Order>,
    pub total: usize,
    pub delivered: usize,
    pub failed: usize,
    /// `round(delivered / total * 100)`; 0 when there is no history.
    pub success_rate: u32,
}

pub fn history_report(orders: &[Order]) -> HistoryReport {
    let mut entries: Vec<Order> = orders
        .iter()
        .filter(|o| o.status.is_terminal())
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let total = entries.len();
    let delivered = entries
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .count();
    let failed = total - delivered;
    let success_rate = if total > 0 {
        (delivered as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    HistoryReport {
        entries,
        total,
        delivered,
        failed,
        success_rate,
    }
}
