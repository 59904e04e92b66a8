//! HTTP server assembly: database, migrations, session middleware, routes.

use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{time, Key, SameSite};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use microblog_migration::{Migrator, MigratorTrait};

use crate::config::{AppConfig, SessionConfig};
use crate::database;
use crate::entities::users::Model;
use crate::metrics::{AppMetrics, MetricsMiddleware};
use crate::router;
use crate::security::PasswordHasher;

/// Signing key for the session cookie.
///
/// An empty secret yields a fresh random key, which invalidates every
/// session on restart; fine for development, logged loudly for production.
fn session_key(config: &SessionConfig) -> Key {
    if config.secret.is_empty() {
        ::tracing::warn!("No session secret configured; sessions will not survive a restart");

        Key::generate()
    } else {
        Key::derive_from(config.secret.as_bytes())
    }
}

/// Run the server until shutdown.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to the database")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to apply database migrations")?;

    let hasher = PasswordHasher::from_config(&config.auth)
        .map_err(|e| anyhow::anyhow!("Failed to configure password hasher: {e}"))?;

    let metrics = AppMetrics::with_config(Some(&config));
    metrics.set_users_total(Model::count(&db).await);

    let key = session_key(&config.session);
    let addr = config.server.bind_addr();
    let workers = config.server.workers;

    let db = Data::new(db);
    let hasher = Data::new(hasher);
    let metrics_data = Data::new(metrics.clone());
    let session_config = config.session.clone();

    ::tracing::info!(
        host = %addr.0,
        port = addr.1,
        environment = %config.app.environment,
        "Starting server"
    );

    let mut server = HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name(session_config.cookie_name.clone())
            .cookie_path("/".into())
            .cookie_secure(session_config.cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .session_lifecycle(
                PersistentSession::default()
                    .session_ttl(time::Duration::seconds(session_config.ttl_seconds as i64)),
            )
            .build();

        App::new()
            .app_data(db.clone())
            .app_data(hasher.clone())
            .app_data(metrics_data.clone())
            .wrap(MetricsMiddleware::new(metrics.clone()))
            .wrap(session)
            .configure(router::route)
    })
    .bind(addr)
    .context("Failed to bind server address")?;

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.run().await.context("Server terminated with an error")
}
