//! Shared fixtures for unit and integration tests.

pub mod setup;

/// Build the full application as an in-process test service.
///
/// Expands to `(service, db)`: the initialized actix-web service wired
/// exactly like production (state, session middleware, routes) on top of a
/// fresh in-memory database, plus the database handle for assertions.
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let hasher =
            $crate::testing::setup::password_hasher().expect("Failed to build password hasher");
        let metrics = $crate::AppMetrics::new();

        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(hasher))
            .app_data(::actix_web::web::Data::new(metrics.clone()))
            .wrap($crate::MetricsMiddleware::new(metrics))
            .wrap($crate::testing::setup::session_middleware())
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
