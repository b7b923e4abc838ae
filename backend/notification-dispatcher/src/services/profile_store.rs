use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::UserProfile;

/// Read-only user profile lookup
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by user id. `Ok(None)` means the user does not exist.
    async fn fetch(&self, user_id: &str) -> AppResult<Option<UserProfile>>;
}

/// Postgres-backed profile store reading from the `users` table
pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn fetch(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT display_name, fcm_token, lang
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(profile)
    }
}
