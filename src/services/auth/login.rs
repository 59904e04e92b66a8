use sea_orm::DatabaseConnection;

use crate::entities::users::Model;
use crate::errors::{Error, Validation};
use crate::metrics::AppMetrics;
use crate::requests::auth::LoginForm;
use crate::security::PasswordHasher;

/// Validation key for the credential mismatch case, as opposed to a
/// per-field problem with the submitted form.
pub const CREDENTIALS_FIELD: &str = "credentials";

/// Shown for an unknown username and for a wrong password alike, so the
/// response does not reveal which half was wrong.
pub const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Check the submitted credentials and return the matching account.
///
/// A verified login whose stored hash predates the current Argon2
/// parameters is transparently re-hashed.
#[::tracing::instrument(skip(db, hasher, metrics, form), fields(username = %form.username))]
pub async fn login(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    metrics: &AppMetrics,
    form: LoginForm,
) -> Result<Model, Error> {
    let mut validation = Validation::new();
    let username = form.username.trim().to_lowercase();
    let password = form.password;

    if username.is_empty() {
        validation.add("username", "This field is required.");
    }

    if password.is_empty() {
        validation.add("password", "This field is required.");
    }

    if !validation.is_empty() {
        return Err(validation.into());
    }

    let user = match Model::find_by_username(db, &username).await {
        Some(user) => user,
        None => {
            metrics.record_login_attempt(false);
            validation.add(CREDENTIALS_FIELD, BAD_CREDENTIALS);

            return Err(validation.into());
        }
    };

    if !hasher.verify(&password, &user.password)? {
        metrics.record_login_attempt(false);
        validation.add(CREDENTIALS_FIELD, BAD_CREDENTIALS);

        return Err(validation.into());
    }

    let user = if hasher.needs_rehash(&user.password)? {
        let upgraded = hasher.hash(&password)?;

        match user.update_password(db, upgraded).await {
            Ok(updated) => {
                ::tracing::info!(user_id = %updated.id, "Password hash upgraded");

                updated
            }
            Err(e) => {
                // The credentials already verified; a failed upgrade must
                // not block the login.
                ::tracing::warn!(user_id = %user.id, "Failed to upgrade password hash: {}", e);

                user
            }
        }
    } else {
        user
    };

    metrics.record_login_attempt(true);

    ::tracing::info!(user_id = %user.id, "User logged in");

    Ok(user)
}
