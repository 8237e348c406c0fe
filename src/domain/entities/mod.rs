pub mod activity;
pub mod agent;
pub mod order;
pub mod pending;

pub use activity::{ActivityEntry, ActivityKind, ActivityLog, ACTIVITY_LOG_CAPACITY};
pub use agent::{Agent, AgentStats};
pub use order::{DeliveryProof, Order, OrderItem, Recipient, StatusUpdate, TransitionError};
pub use pending::PendingChange;
