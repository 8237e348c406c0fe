use crate::application::ports::{Snapshot, SnapshotStore};
use crate::domain::entities::{ActivityLog, Agent, Order};
use crate::shared::error::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::info;

const KEY_ORDERS: &str = "orders";
const KEY_ACTIVITY: &str = "activity_log";
const KEY_AGENT: &str = "agent";

/// SQLite-backed snapshot persistence: one JSON payload row per collection.
pub struct SqliteSnapshotStore {
    pool: Pool<Sqlite>,
}

impl SqliteSnapshotStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Connects, creating the database file and schema when missing.
    pub async fn initialize(database_url: &str, max_connections: u32) -> Result<Self> {
        if let Some(file) = database_url
            .strip_prefix("sqlite:")
            .map(|rest| rest.split('?').next().unwrap_or(rest))
        {
            if file != ":memory:" && !file.is_empty() {
                if let Some(parent) = Path::new(file).parent() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                payload TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        info!("Snapshot store ready: {}", database_url);
        Ok(Self { pool })
    }

    async fn payload(&self, key: &str) -> Result<Option<String>> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM snapshots WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(payload)
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn load(&self) -> Result<Option<Snapshot>> {
        let (orders, activity, agent) = match (
            self.payload(KEY_ORDERS).await?,
            self.payload(KEY_ACTIVITY).await?,
            self.payload(KEY_AGENT).await?,
        ) {
            (Some(orders), Some(activity), Some(agent)) => (orders, activity, agent),
            _ => return Ok(None),
        };

        let orders: Vec<Order> = serde_json::from_str(&orders)?;
        let activity: ActivityLog = serde_json::from_str(&activity)?;
        let agent: Agent = serde_json::from_str(&agent)?;

        Ok(Some(Snapshot {
            orders,
            activity,
            agent,
        }))
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let now = Utc::now().timestamp();
        let rows = [
            (KEY_ORDERS, serde_json::to_string(&snapshot.orders)?),
            (KEY_ACTIVITY, serde_json::to_string(&snapshot.activity)?),
            (KEY_AGENT, serde_json::to_string(&snapshot.agent)?),
        ];

        let mut tx = self.pool.begin().await?;
        for (key, payload) in rows {
            sqlx::query(
                r#"
                INSERT INTO snapshots (key, payload, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET payload = ?2, updated_at = ?3
                "#,
            )
            .bind(key)
            .bind(&payload)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await.map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use tempfile::TempDir;

    async fn memory_store() -> SqliteSnapshotStore {
        SqliteSnapshotStore::initialize("sqlite::memory:?cache=shared", 1)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn load_on_fresh_database_is_none() {
        let store = memory_store().await;
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn snapshot_round_trips() {
        let store = memory_store().await;
        let snapshot = seed::initial_snapshot(Utc::now());

        store.save(&snapshot).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn save_overwrites_previous_snapshot() {
        let store = memory_store().await;
        let mut snapshot = seed::initial_snapshot(Utc::now());

        store.save(&snapshot).await.unwrap();
        snapshot.agent.is_online = !snapshot.agent.is_online;
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.agent.is_online, snapshot.agent.is_online);
    }

    #[tokio::test]
    async fn initialize_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("data").join("entrega.db");
        let url = format!("sqlite:{}?mode=rwc", db_path.display());

        let store = SqliteSnapshotStore::initialize(&url, 1).await.unwrap();
        store
            .save(&seed::initial_snapshot(Utc::now()))
            .await
            .unwrap();

        assert!(db_path.exists());
    }
}
