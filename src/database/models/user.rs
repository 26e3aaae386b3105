use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `user` table. `password` holds a bcrypt hash.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}
