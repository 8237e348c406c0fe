//! Seed data used when no local snapshot exists yet: one agent, four orders
//! covering the whole lifecycle, and a short starter activity feed.

use crate::application::ports::Snapshot;
use crate::domain::entities::{
    ActivityEntry, ActivityLog, Agent, AgentStats, DeliveryProof, Order, OrderItem, Recipient,
};
use crate::domain::value_objects::{
    FailureReason, GeoPoint, OrderId, OrderStatus, OtpCode, PhotoRef,
};
use chrono::{DateTime, Duration, Utc};

fn oid(id: &str) -> OrderId {
    OrderId::new(id.to_string()).expect("seed order id")
}

fn otp(code: &str) -> OtpCode {
    OtpCode::new(code.to_string()).expect("seed otp")
}

pub fn agent() -> Agent {
    Agent {
        id: "AG-001".into(),
        name: "Antonio Silva".into(),
        phone: "+245 96 123 4567".into(),
        zone: "Bissau Central".into(),
        is_online: true,
        avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=Antonio".into(),
        stats: AgentStats {
            weekly_deliveries: 42,
            success_rate: 95,
            avg_time_per_delivery: "25m".into(),
        },
    }
}

pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    let assigned = Order::new(
        oid("ORD-7829"),
        Recipient {
            name: "Maria Da Silva".into(),
            phone: "+245 95 555 0101".into(),
            whatsapp: "+245 95 555 0101".into(),
            address: "Rua 14, Bairro de Ajuda".into(),
            landmark: "Near the yellow pharmacy".into(),
            coordinates: GeoPoint::new(11.8636, -15.5977),
        },
        vec![
            OrderItem::bundle(
                "ITM-1",
                "Family Essentials Pack",
                1,
                vec!["Rice 5kg".into(), "Oil 1L".into(), "Sugar 2kg".into()],
            )
            .expect("seed bundle"),
            OrderItem::single("ITM-2", "Nido Milk Powder", 2),
        ],
        otp("1234"),
        now - Duration::minutes(30),
    );

    let mut in_transit = Order::new(
        oid("ORD-7830"),
        Recipient {
            name: "Joao Pereira".into(),
            phone: "+245 96 555 0202".into(),
            whatsapp: "+245 96 555 0202".into(),
            address: "Avenida dos Combatentes".into(),
            landmark: "Behind the main market".into(),
            coordinates: GeoPoint::new(11.86, -15.6),
        },
        vec![OrderItem::bundle(
            "ITM-3",
            "Hygiene Bundle",
            1,
            vec!["Soap x4".into(), "Toothpaste x2".into(), "Shampoo".into()],
        )
        .expect("seed bundle")],
        otp("5678"),
        now - Duration::hours(1),
    );
    in_transit.status = OrderStatus::InTransit;
    in_transit.updated_at = now - Duration::minutes(15);

    let mut delivered = Order::new(
        oid("ORD-7825"),
        Recipient {
            name: "Fatima Gomes".into(),
            phone: "+245 95 555 0303".into(),
            whatsapp: "+245 95 555 0303".into(),
            address: "Bairro Militar".into(),
            landmark: "Blue gate house".into(),
            coordinates: GeoPoint::new(11.87, -15.58),
        },
        vec![OrderItem::single("ITM-4", "Rice 20kg", 1)],
        otp("9012"),
        now - Duration::hours(4),
    );
    delivered.status = OrderStatus::Delivered;
    delivered.updated_at = now - Duration::hours(3);
    delivered.proof_of_delivery = Some(DeliveryProof {
        photo: PhotoRef::new("https://picsum.photos/seed/delivery1/400/300".into())
            .expect("seed photo"),
        captured_at: now - Duration::hours(3),
        location: GeoPoint::new(11.87, -15.58),
        confirmed_by: "Antonio Silva".into(),
    });

    let mut failed = Order::new(
        oid("ORD-7820"),
        Recipient {
            name: "Paulo Mendez".into(),
            phone: "+245 96 555 0404".into(),
            whatsapp: "+245 96 555 0404".into(),
            address: "Praca Che Guevara".into(),
            landmark: "Next to the cafe".into(),
            coordinates: GeoPoint::new(11.85, -15.57),
        },
        vec![OrderItem::single("ITM-5", "Cooking Oil 5L", 2)],
        otp("3456"),
        now - Duration::hours(24),
    );
    failed.status = OrderStatus::Failed;
    failed.updated_at = now - Duration::hours(20);
    failed.failure_reason =
        Some(FailureReason::new("Recipient not available".into()).expect("seed reason"));
    failed.notes = Some("Called 3 times, no answer.".into());

    vec![assigned, in_transit, delivered, failed]
}

pub fn activity(now: DateTime<Utc>) -> ActivityLog {
    ActivityLog::from_entries(vec![
        ActivityEntry::status_change(
            "Marked Order #ORD-7830 as In Transit",
            oid("ORD-7830"),
            now - Duration::minutes(15),
        ),
        ActivityEntry::status_change(
            "Delivered Order #ORD-7825",
            oid("ORD-7825"),
            now - Duration::hours(3),
        ),
        ActivityEntry::system("Shift started - Online", now - Duration::hours(5)),
    ])
}

pub fn initial_snapshot(now: DateTime<Utc>) -> Snapshot {
    Snapshot {
        orders: orders(now),
        activity: activity(now),
        agent: agent(),
    }
}
