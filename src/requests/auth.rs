use serde::{Deserialize, Serialize};

/// Login form body.
///
/// Fields default to empty strings so a missing field surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
