use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types;

/// Row of `user_t`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for types::User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.user_id,
            username: value.username,
            email: value.email,
            created_at: value.created_at,
        }
    }
}
