use crate::domain::entities::{ActivityEntry, ActivityLog, Order};
use crate::domain::value_objects::OrderStatus;
use chrono::NaiveDate;

/// What the home screen shows: today's workload, earnings, the active
/// delivery if any, and the latest activity.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSummary {
    pub assigned_today: usize,
    pub completed_today: usize,
    pub failed_today: usize,
    pub earnings: u64,
    pub active_order: Option<Order>,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Recomputed from scratch on every read; `today` is the agent's local
/// calendar day.
pub fn home_summary(
    orders: &[Order],
    activity: &ActivityLog,
    today: NaiveDate,
    unit_rate: u32,
    recent_limit: usize,
) -> HomeSummary {
    let assigned_today = orders
        .iter()
        .filter(|o| o.assigned_at.date_naive() == today)
        .count();
    let completed_today = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered && o.updated_at.date_naive() == today)
        .count();
    let failed_today = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Failed && o.updated_at.date_naive() == today)
        .count();

    let earnings = completed_today as u64 * u64::from(unit_rate);

    let active_order = orders
        .iter()
        .find(|o| o.status == OrderStatus::InTransit)
        .cloned();

    HomeSummary {
        assigned_today,
        completed_today,
        failed_today,
        earnings,
        active_order,
        recent_activity: activity.recent(recent_limit),
    }
}
