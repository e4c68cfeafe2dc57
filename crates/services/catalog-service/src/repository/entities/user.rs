//! User record.

use serde::{Deserialize, Serialize};

/// Row of the `users` table. `password` holds the Argon2 hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub password: String,
}
