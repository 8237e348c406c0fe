use crate::domain::value_objects::{
    FailureReason, GeoPoint, OrderId, OrderStatus, OtpCode, PhotoRef,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub landmark: String,
    pub coordinates: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub is_bundle: bool,
    /// Contained item descriptions; non-empty exactly when `is_bundle`.
    #[serde(default)]
    pub contents: Vec<String>,
}

impl OrderItem {
    pub fn single(id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            is_bundle: false,
            contents: Vec::new(),
        }
    }

    pub fn bundle(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        contents: Vec<String>,
    ) -> Result<Self, String> {
        if contents.is_empty() {
            return Err("A bundle must list its contents".to_string());
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            quantity,
            is_bundle: true,
            contents,
        })
    }
}

/// Evidence captured when a delivery is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryProof {
    pub photo: PhotoRef,
    pub captured_at: DateTime<Utc>,
    pub location: GeoPoint,
    pub confirmed_by: String,
}

/// The closed set of transition payloads. Each variant carries exactly the
/// detail its target status requires, so a delivered order can never end up
/// holding a failure reason (and vice versa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusUpdate {
    StartTransit,
    Deliver(DeliveryProof),
    Fail {
        reason: FailureReason,
        notes: Option<String>,
    },
}

impl StatusUpdate {
    pub fn target_status(&self) -> OrderStatus {
        match self {
            StatusUpdate::StartTransit => OrderStatus::InTransit,
            StatusUpdate::Deliver(_) => OrderStatus::Delivered,
            StatusUpdate::Fail { .. } => OrderStatus::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub recipient: Recipient,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub assigned_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub otp: OtpCode,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub failure_reason: Option<FailureReason>,
    /// Reserved for a future re-attempt scheduling feature.
    #[serde(default)]
    pub reattempt_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub proof_of_delivery: Option<DeliveryProof>,
}

impl Order {
    pub fn new(
        id: OrderId,
        recipient: Recipient,
        items: Vec<OrderItem>,
        otp: OtpCode,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recipient,
            items,
            status: OrderStatus::Assigned,
            assigned_at,
            updated_at: assigned_at,
            otp,
            notes: None,
            failure_reason: None,
            reattempt_time: None,
            proof_of_delivery: None,
        }
    }

    /// Applies a lifecycle transition, refreshing `updated_at` and merging
    /// the payload onto the order. Rejects any move the state machine does
    /// not admit, leaving the order untouched.
    pub fn apply(&mut self, update: &StatusUpdate, now: DateTime<Utc>) -> Result<(), TransitionError> {
        let to = update.target_status();
        if !self.status.can_transition_to(to) {
            return Err(TransitionError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to,
            });
        }

        match update {
            StatusUpdate::StartTransit => {}
            StatusUpdate::Deliver(proof) => {
                self.proof_of_delivery = Some(proof.clone());
            }
            StatusUpdate::Fail { reason, notes } => {
                self.failure_reason = Some(reason.clone());
                if notes.is_some() {
                    self.notes = notes.clone();
                }
            }
        }

        self.status = to;
        self.updated_at = now;
        Ok(())
    }
}
