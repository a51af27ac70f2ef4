#![allow(non_snake_case)]

mod client;

use roster::model;

#[cfg(feature = "server")]
use roster::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let http_client = startup::build_http_client()?;
        let oauth_client = startup::build_discord_client(&config)?;
        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;

        tracing::info!(
            credential_source = ?config.sync_credential_source,
            "Starting server"
        );

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState {
                db,
                http_client,
                oauth_client,
                config: Arc::new(config),
            })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
