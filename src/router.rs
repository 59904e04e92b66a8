use actix_web::web::ServiceConfig;

use crate::controllers;

pub fn route(app: &mut ServiceConfig) {
    // Home
    app.service(controllers::home::index);
    // Auth
    app.service(controllers::auth::register_form);
    app.service(controllers::auth::register);
    app.service(controllers::auth::login_form);
    app.service(controllers::auth::login);
    app.service(controllers::auth::logout);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    // Metrics endpoint
    app.service(controllers::metrics::metrics);
}
