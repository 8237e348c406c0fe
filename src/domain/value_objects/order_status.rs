use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of an order. `Assigned` is the initial state;
/// `Delivered` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Assigned,
    InTransit,
    Delivered,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Assigned => "assigned",
            OrderStatus::InTransit => "in_transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Failed => "failed",
        }
    }

    /// Human-readable label, as shown to the agent and used in activity
    /// log messages.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Assigned => "Assigned",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Failed => "Failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Failed)
    }

    /// Whether the state machine admits `self -> next`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Assigned, OrderStatus::InTransit)
                | (OrderStatus::InTransit, OrderStatus::Delivered)
                | (OrderStatus::InTransit, OrderStatus::Failed)
        )
    }

    /// Fixed ordering used by the order list: active work floats to the top.
    pub fn sort_priority(&self) -> u8 {
        match self {
            OrderStatus::InTransit => 0,
            OrderStatus::Assigned => 1,
            OrderStatus::Delivered => 2,
            OrderStatus::Failed => 3,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_admit_no_transition() {
        for terminal in [OrderStatus::Delivered, OrderStatus::Failed] {
            for next in [
                OrderStatus::Assigned,
                OrderStatus::InTransit,
                OrderStatus::Delivered,
                OrderStatus::Failed,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn only_table_transitions_are_allowed() {
        assert!(OrderStatus::Assigned.can_transition_to(OrderStatus::InTransit));
        assert!(OrderStatus::InTransit.can_transition_to(OrderStatus::Delivered));
        assert!(OrderStatus::InTransit.can_transition_to(OrderStatus::Failed));

        assert!(!OrderStatus::Assigned.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Assigned.can_transition_to(OrderStatus::Failed));
        assert!(!OrderStatus::InTransit.can_transition_to(OrderStatus::Assigned));
    }

    #[test]
    fn in_transit_label_has_a_space() {
        assert_eq!(OrderStatus::InTransit.to_string(), "In Transit");
    }
}
