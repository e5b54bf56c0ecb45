use anyhow::Result;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::http::build_client;
use crate::proxy::Forwarder;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        if self.config.riot.api_key.is_none() {
            warn!("RIOT_API_KEY is not set; every proxied request will fail");
        }

        let client = build_client(self.config.riot.user_agent, self.config.riot.timeout_secs)?;
        let forwarder = Forwarder::new(self.config.riot.api_key.clone(), client);
        let state = Arc::new(AppState { forwarder });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Proxy listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
