use chrono::Utc;
use sea_orm::prelude::DateTime;

pub mod user;

/// Current UTC wall clock as the naive timestamp stored in the database.
pub fn now() -> DateTime {
    Utc::now().naive_utc()
}
