use chrono::NaiveDate;
use derive_more::{AsRef, Display, Into};

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub name: Name,
    pub email: String,
    // Plaintext sample credential. There is no authentication backend.
    pub password: String,
    pub join_date: NaiveDate,
    pub goals: String,
}

#[derive(AsRef, Debug, Display, Clone, Hash, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(String);

impl From<&str> for UserID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserID {
    fn from(value: String) -> Self {
        Self(value)
    }
}
