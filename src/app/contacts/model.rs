//! 联系人数据模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored contact, always owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: NaiveDate,
    pub notes: Option<String>,
}

/// Request body for create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactPayload {
    #[validate(length(min = 1, max = 50, message = "first_name must be between 1 and 50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "last_name must be between 1 and 50 characters"))]
    pub last_name: String,

    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 150, message = "email must be at most 150 characters")
    )]
    pub email: String,

    #[validate(length(min = 3, max = 30, message = "phone must be between 3 and 30 characters"))]
    pub phone: String,

    pub birthday: NaiveDate,

    #[serde(default)]
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

impl Contact {
    /// Overwrite every user-editable field from `payload`.
    pub fn replace_with(&mut self, payload: ContactPayload) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.email = payload.email;
        self.phone = payload.phone;
        self.birthday = payload.birthday;
        self.notes = payload.notes;
    }

    /// Case-insensitive substring match on first name, last name or email.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Query string of `GET /api/contacts/`
#[derive(Debug, Default, Deserialize)]
pub struct ListContactsQuery {
    #[serde(default)]
    pub find_string: String,
}

/// Query string of the birthday endpoints
#[derive(Debug, Default, Deserialize)]
pub struct BirthdaysQuery {
    pub days: Option<u32>,
}
