pub mod failure_reason;
pub mod geo;
pub mod order_id;
pub mod order_status;
pub mod otp;
pub mod photo;

pub use failure_reason::FailureReason;
pub use geo::GeoPoint;
pub use order_id::OrderId;
pub use order_status::OrderStatus;
pub use otp::OtpCode;
pub use photo::PhotoRef;
