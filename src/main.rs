#![deny(warnings)]

use anyhow::Context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    microblog::telemetry::init();

    let config = microblog::config::load().context("Failed to load configuration")?;

    microblog::server::run(config).await
}
