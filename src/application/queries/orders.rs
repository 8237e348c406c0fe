use crate::domain::entities::Order;
use crate::domain::value_objects::OrderStatus;

/// Status chips on the order list. `Completed` is the user-facing alias
/// for `Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Assigned,
    InTransit,
    Completed,
    Failed,
}

impl StatusFilter {
    fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Assigned => status == OrderStatus::Assigned,
            StatusFilter::InTransit => status == OrderStatus::InTransit,
            StatusFilter::Completed => status == OrderStatus::Delivered,
            StatusFilter::Failed => status == OrderStatus::Failed,
        }
    }
}

/// Filters by status chip and case-insensitive substring search over order
/// id and recipient name, then sorts by status priority (active work first)
/// with `updated_at` descending as the tie-breaker.
pub fn filter_orders(orders: &[Order], filter: StatusFilter, search: &str) -> Vec<Order> {
    let needle = search.to_lowercase();

    let mut matched: Vec<Order> = orders
        .iter()
        .filter(|o| filter.matches(o.status))
        .filter(|o| {
            needle.is_empty()
                || o.id.as_str().to_lowercase().contains(&needle)
                || o.recipient.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        a.status
            .sort_priority()
            .cmp(&b.status.sort_priority())
            .then(b.updated_at.cmp(&a.updated_at))
    });

    matched
}
