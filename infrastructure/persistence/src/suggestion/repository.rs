use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::suggestion::model::Suggestion;
use business::domain::suggestion::repository::SuggestionRepository;

use super::entity::SuggestionEntity;

pub struct SuggestionRepositoryPostgres {
    pool: PgPool,
}

impl SuggestionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SuggestionRepository for SuggestionRepositoryPostgres {
    async fn save(&self, suggestion: &Suggestion, user_id: &UserId) -> Result<(), RepositoryError> {
        let entity = SuggestionEntity::from_domain(suggestion, user_id);

        sqlx::query(
            r#"INSERT INTO suggestions (id, user_id, name, description, price, billing_cycle, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(entity.id)
        .bind(&entity.user_id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.price)
        .bind(&entity.billing_cycle)
        .bind(entity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
