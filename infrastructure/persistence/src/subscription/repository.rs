use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::subscription::repository::SubscriptionRepository;

pub struct SubscriptionRepositoryPostgres {
    pool: PgPool,
}

impl SubscriptionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryPostgres {
    async fn get_names(&self, user_id: &UserId) -> Result<Vec<String>, RepositoryError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM subscriptions WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
