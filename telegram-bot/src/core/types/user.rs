//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name to address the user by: first name, else username, else the numeric id.
    pub fn display_name(&self) -> String {
        self.first_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.username.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }
}
