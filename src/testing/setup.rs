use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use microblog_migration::{Migrator, MigratorTrait};
use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::config::auth::{Argon2Config, AuthConfig};
use crate::database;
use crate::entities::users;
use crate::models::now;
use crate::security::PasswordHasher;

/// An in-memory SQLite database with all migrations applied.
///
/// Each call returns an independent database, so tests cannot observe one
/// another's rows.
///
/// # Panics
/// Panics if the connection or a migration fails; broken setup should fail
/// the test immediately.
pub async fn database() -> DatabaseConnection {
    let db = database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// A `PasswordHasher` with reduced Argon2 costs.
///
/// Production parameters take hundreds of milliseconds per hash; these keep
/// the same code path under test at a fraction of that.
pub fn password_hasher() -> Result<PasswordHasher, argon2::password_hash::Error> {
    let config = AuthConfig {
        argon2: Argon2Config {
            memory_cost: 19456,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        },
    };

    PasswordHasher::from_config(&config)
}

/// Session middleware configured for tests.
///
/// Generates a fresh signing key per invocation and disables the `Secure`
/// cookie flag so plain-HTTP test requests carry the session.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Insert a user with random unique credentials; the password is always
/// `password`.
pub async fn create_test_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
) -> Result<users::Model, DbErr> {
    let random_suffix: u32 = rand::thread_rng().gen();
    let username = format!("test_user_{}", random_suffix);
    let email = format!("test_{}@example.com", random_suffix);

    let password = hasher.hash("password").expect("Failed to hash password");

    let user = users::Model {
        id: Uuid::new_v4(),
        username,
        email,
        password,
        created_at: now(),
        updated_at: now(),
    };

    user.store(db).await
}
