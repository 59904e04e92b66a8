//! Cookie session state: the logged-in user and one-shot flash messages.

use std::future::{ready, Ready};

use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::errors::Error;

const USER_ID_KEY: &str = "user_id";
const FLASHES_KEY: &str = "_flashes";

/// Typed wrapper over the request's cookie [`Session`].
///
/// Extract it in handlers like any other extractor. All state lives in the
/// signed session cookie, so nothing here touches the database.
pub struct SessionContext(Session);

impl SessionContext {
    /// Record `id` as the logged-in user.
    pub fn persist_user(&self, id: Uuid) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, id.to_string())
            .map_err(Error::session)
    }

    /// The logged-in user id, if any.
    ///
    /// A stale or undecodable value reads as logged out rather than failing
    /// the request.
    pub fn user_id(&self) -> Option<Uuid> {
        let raw = match self.0.get::<String>(USER_ID_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                ::tracing::debug!("Failed to read session user id: {}", e);

                return None;
            }
        };

        match Uuid::parse_str(&raw) {
            Ok(id) => Some(id),
            Err(e) => {
                ::tracing::debug!("Session user id is not a UUID: {}", e);

                None
            }
        }
    }

    /// Drop the logged-in user, leaving the rest of the session intact.
    pub fn forget_user(&self) {
        self.0.remove(USER_ID_KEY);
    }

    /// Queue a status message for the next rendered page.
    pub fn flash<M: Into<String>>(&self, message: M) -> Result<(), Error> {
        let mut flashes = self
            .0
            .get::<Vec<String>>(FLASHES_KEY)
            .map_err(Error::session)?
            .unwrap_or_default();

        flashes.push(message.into());

        self.0.insert(FLASHES_KEY, flashes).map_err(Error::session)
    }

    /// Remove and return all queued flash messages.
    ///
    /// Taking clears the queue, so each message renders exactly once.
    pub fn take_flashes(&self) -> Vec<String> {
        let flashes = match self.0.get::<Vec<String>>(FLASHES_KEY) {
            Ok(flashes) => flashes.unwrap_or_default(),
            Err(e) => {
                ::tracing::debug!("Discarding undecodable flash messages: {}", e);

                Vec::new()
            }
        };

        self.0.remove(FLASHES_KEY);

        flashes
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self(req.get_session())))
    }
}
