mod api;
mod config;
mod dto;
mod error;
mod state;
mod wakeup;

use crate::{config::Config, state::AppState};
use courier::prelude::*;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!("Starting server...");
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let mut orders = OrderStore::new();
    if let Some(path) = &config.seed_path {
        info!("Loading orders...");
        let now = Instant::now();
        if let Err(err) = orders.load_csv(path) {
            error!("Failed to seed orders from {}: {err}", path.display());
            std::process::exit(1);
        }
        info!("Loading orders took {:?}", now.elapsed());
    }

    let sequencer = Sequencer::new().with_fallback(config.fallback);
    let state = Arc::new(AppState::new(orders, sequencer));
    let app = api::router(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);

    if let Some(wakeup) = config.wakeup.clone() {
        wakeup::spawn(wakeup);
    }

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
