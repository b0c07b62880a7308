//! Metabolic Calculator server binary.

use std::sync::Arc;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use metabolic_calculator::adapters::http::{skill_routes, SkillHandlers};
use metabolic_calculator::adapters::{tracker_from_config, SkillDispatcher};
use metabolic_calculator::application::HandleTurnHandler;
use metabolic_calculator::config::{AppConfig, ServerConfig};
use metabolic_calculator::domain::dialog::DialogEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let tracker = tracker_from_config(&config.analytics)?;
    let engine = DialogEngine::new(config.dialog.engine_config());
    let handler = HandleTurnHandler::new(engine, tracker);

    let mut dispatcher = SkillDispatcher::new(handler, config.display.clone());
    if let Some(application_id) = config.skill.expected_application_id() {
        dispatcher = dispatcher.with_application_id(application_id);
    }

    let app = skill_routes(SkillHandlers::new(Arc::new(dispatcher)))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "metabolic calculator listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
