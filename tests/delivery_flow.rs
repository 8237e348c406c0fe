use entrega::application::queries::StatusFilter;
use entrega::domain::value_objects::{GeoPoint, OrderId, OrderStatus, PhotoRef};
use entrega::shared::config::{AppConfig, DatabaseConfig, DeliveryConfig};
use entrega::{AppError, AppState};
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: format!("sqlite:{}/entrega.db?mode=rwc", dir.path().display()),
            max_connections: 5,
        },
        delivery: DeliveryConfig {
            unit_rate: 1500,
            recent_activity_limit: 5,
        },
    }
}

async fn boot(dir: &TempDir) -> AppState {
    AppState::initialize(&config_for(dir))
        .await
        .expect("state should initialize")
}

fn oid(value: &str) -> OrderId {
    OrderId::new(value.to_string()).expect("order id")
}

#[tokio::test]
async fn fresh_database_is_seeded() {
    let dir = TempDir::new().unwrap();
    let state = boot(&dir).await;

    let orders = state.delivery.orders().await;
    assert_eq!(orders.len(), 4);
    for status in [
        OrderStatus::Assigned,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Failed,
    ] {
        assert!(orders.iter().any(|o| o.status == status));
    }

    let agent = state.delivery.agent().await;
    assert_eq!(agent.name, "Antonio Silva");
    assert!(!state.delivery.recent_activity(5).await.is_empty());
}

#[tokio::test]
async fn full_delivery_flow_from_assignment_to_proof() {
    let dir = TempDir::new().unwrap();
    let state = boot(&dir).await;
    let id = oid("ORD-7829");

    let order = state.delivery.start_delivery(&id).await.unwrap();
    assert_eq!(order.status, OrderStatus::InTransit);

    state
        .devices
        .camera
        .supply(PhotoRef::new("photos/pod-7829.jpg".into()).unwrap());
    state.devices.gps.set_fix(GeoPoint::new(11.8636, -15.5977));

    let order = state.delivery.confirm_delivery(&id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    let proof = order
        .proof_of_delivery
        .expect("delivered order carries proof");
    assert_eq!(proof.location, GeoPoint::new(11.8636, -15.5977));
    assert_eq!(proof.confirmed_by, "Antonio Silva");

    let activity = state.delivery.recent_activity(2).await;
    assert_eq!(activity[0].message, "Updated Order #ORD-7829 to Delivered");
    assert_eq!(activity[1].message, "Updated Order #ORD-7829 to In Transit");
}

#[tokio::test]
async fn confirmation_without_photo_is_rejected() {
    let dir = TempDir::new().unwrap();
    let state = boot(&dir).await;
    let id = oid("ORD-7830");

    // No photo supplied: the capture comes back cancelled.
    let err = state.delivery.confirm_delivery(&id).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(
        state.delivery.order(&id).await.unwrap().status,
        OrderStatus::InTransit
    );
}

#[tokio::test]
async fn gps_failure_falls_back_to_zero_coordinate() {
    let dir = TempDir::new().unwrap();
    let state = boot(&dir).await;
    let id = oid("ORD-7830");

    state
        .devices
        .camera
        .supply(PhotoRef::new("photos/pod-7830.jpg".into()).unwrap());
    // No fix set on the simulated GPS.

    let order = state.delivery.confirm_delivery(&id).await.unwrap();
    assert_eq!(order.proof_of_delivery.unwrap().location, GeoPoint::FALLBACK);
}

#[tokio::test]
async fn offline_changes_queue_and_reconnect_clears_them() {
    let dir = TempDir::new().unwrap();
    let state = boot(&dir).await;
    let id = oid("ORD-7830");

    state.set_connectivity(false).await;
    let order = state
        .delivery
        .report_failure(&id, "Recipient not available", None)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Failed);
    assert_eq!(state.delivery.pending_sync_count().await, 1);
    assert!(state.delivery.is_pending_sync(&id).await);

    state.set_connectivity(true).await;
    assert_eq!(state.delivery.pending_sync_count().await, 0);
    assert!(!state.delivery.is_pending_sync(&id).await);
    // The change itself survives the queue flush.
    assert_eq!(
        state.delivery.order(&id).await.unwrap().status,
        OrderStatus::Failed
    );
}

#[tokio::test]
async fn terminal_orders_reject_further_updates() {
    let dir = TempDir::new().unwrap();
    let state = boot(&dir).await;
    let id = oid("ORD-7825");

    state
        .devices
        .camera
        .supply(PhotoRef::new("photos/again.jpg".into()).unwrap());
    let err = state.delivery.confirm_delivery(&id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    assert_eq!(
        state.delivery.order(&id).await.unwrap().status,
        OrderStatus::Delivered
    );
}

#[tokio::test]
async fn state_survives_restart_without_reseeding() {
    let dir = TempDir::new().unwrap();
    {
        let state = boot(&dir).await;
        state
            .delivery
            .start_delivery(&oid("ORD-7829"))
            .await
            .unwrap();
        state.delivery.toggle_duty().await.unwrap();
    }

    let reopened = boot(&dir).await;
    assert_eq!(
        reopened
            .delivery
            .order(&oid("ORD-7829"))
            .await
            .unwrap()
            .status,
        OrderStatus::InTransit
    );
    assert!(!reopened.delivery.agent().await.is_online);
    assert_eq!(
        reopened.delivery.recent_activity(1).await[0].message,
        "Shift ended - Offline"
    );
}

#[tokio::test]
async fn list_and_history_views_reflect_the_state() {
    let dir = TempDir::new().unwrap();
    let state = boot(&dir).await;

    let active = state
        .delivery
        .list_orders(StatusFilter::InTransit, "")
        .await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, oid("ORD-7830"));

    // Search matches on recipient name, case-insensitively.
    let by_name = state.delivery.list_orders(StatusFilter::All, "maria").await;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, oid("ORD-7829"));

    // In-transit orders lead the unfiltered list.
    let all = state.delivery.list_orders(StatusFilter::All, "").await;
    assert_eq!(all[0].status, OrderStatus::InTransit);

    let history = state.delivery.history().await;
    assert_eq!(history.total, 2);
    assert_eq!(history.delivered, 1);
    assert_eq!(history.failed, 1);
    assert_eq!(history.success_rate, 50);

    let home = state.delivery.home_summary().await;
    assert_eq!(home.earnings, home.completed_today as u64 * 1500);
    assert_eq!(
        home.active_order.as_ref().map(|o| o.id.clone()),
        Some(oid("ORD-7830"))
    );
}
