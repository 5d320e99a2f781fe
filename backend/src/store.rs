use std::sync::Mutex;
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::{debug, error};
use uuid::Uuid;
use shared::models::{ProductId, VoteRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("vote store lock poisoned")]
    LockFailed,
}

/// Backing storage for recorded votes.
#[rocket::async_trait]
pub trait VoteRepository: Send + Sync {
    async fn insert(&self, product_id: &ProductId) -> Result<VoteRecord, StoreError>;

    /// Every recorded vote, oldest first.
    async fn all(&self) -> Result<Vec<VoteRecord>, StoreError>;
}

pub struct PgVoteStore {
    pool: PgPool,
}

impl PgVoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl VoteRepository for PgVoteStore {
    async fn insert(&self, product_id: &ProductId) -> Result<VoteRecord, StoreError> {
        let record = sqlx::query_as::<_, VoteRecord>(
            "INSERT INTO votes (id, product_id) VALUES ($1, $2)
             RETURNING id, product_id, cast_at",
        )
        .bind(Uuid::new_v4())
        .bind(product_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to insert vote for product {}: {}", product_id, e);
            StoreError::from(e)
        })?;

        debug!("Stored vote {} for product {}", record.id, record.product_id);
        Ok(record)
    }

    async fn all(&self) -> Result<Vec<VoteRecord>, StoreError> {
        sqlx::query_as::<_, VoteRecord>(
            "SELECT id, product_id, cast_at FROM votes ORDER BY cast_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from)
    }
}

#[derive(Debug, Default)]
pub struct MemoryVoteStore {
    votes: Mutex<Vec<VoteRecord>>,
}

#[rocket::async_trait]
impl VoteRepository for MemoryVoteStore {
    async fn insert(&self, product_id: &ProductId) -> Result<VoteRecord, StoreError> {
        let record = VoteRecord {
            id: Uuid::new_v4(),
            product_id: product_id.to_string(),
            cast_at: OffsetDateTime::now_utc(),
        };
        self.votes
            .lock()
            .map_err(|_| StoreError::LockFailed)?
            .push(record.clone());
        Ok(record)
    }

    async fn all(&self) -> Result<Vec<VoteRecord>, StoreError> {
        self.votes
            .lock()
            .map(|votes| votes.clone())
            .map_err(|_| StoreError::LockFailed)
    }
}
