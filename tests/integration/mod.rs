//! Integration tests for the microblog web application.
//!
//! Every test builds the full application with `microblog::service!` on a
//! fresh in-memory database, drives it over HTTP and follows redirects by
//! hand, carrying the session cookie between requests the way a browser
//! would.

use actix_web::dev::ServiceResponse;
use actix_web::http::header;

pub mod home_test;
pub mod login_test;

/// The `session=...` pair from the response's `Set-Cookie`, if the session
/// state changed.
///
/// Cookie sessions only send `Set-Cookie` when the state differs from the
/// request's, so callers keep their previous cookie when this is `None`.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("session="))
        .and_then(|value| value.split(';').next())
        .map(|pair| pair.to_string())
}
