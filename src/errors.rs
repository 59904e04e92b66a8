//! Application error types shared by services and controllers.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

/// Accumulator for per-field validation messages.
///
/// Services collect every problem with a submitted form before failing, so
/// the user sees all of them at once instead of fixing one at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    fields: BTreeMap<String, Vec<String>>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: Into<String>, M: Into<String>>(&mut self, field: F, message: M) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for one field, in insertion order.
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All messages across fields, grouped by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(Validation),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("password hash error: {0}")]
    PasswordHash(String),

    #[error("session error: {0}")]
    Session(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Error {
    pub fn session<M: fmt::Display>(message: M) -> Self {
        Self::Session(message.to_string())
    }
}

impl From<Validation> for Error {
    fn from(validation: Validation) -> Self {
        Self::Validation(validation)
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(error.to_string())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Controllers that can re-render a form catch Validation themselves;
        // reaching this point means nobody wanted the details.
        let (status, body) = match self {
            Self::Validation(validation) => (
                StatusCode::BAD_REQUEST,
                format!("<h1>Bad Request</h1><p>{validation}</p>"),
            ),
            other => {
                tracing::error!("request failed: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "<h1>Internal Server Error</h1>".to_string(),
                )
            }
        };

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}
