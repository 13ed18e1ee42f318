use crate::app_config::AppConfig;
use crate::dispatch::{DispatchGateway, LoggingDispatchGateway};
use crate::domain::commands::Command;
use crate::domain::events::Event;
use crate::notice_listener::notice_listener;
use crate::operator_console::operator_console;
use crate::store::Store;
use crate::store_listener::store_listener;
use crate::telemetry::TelemetrySimulator;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

mod app_config;
mod dispatch;
mod domain;
mod extensions;
mod marker;
mod notice_listener;
mod operator_console;
mod projection;
mod store;
mod store_listener;
mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let (commands_tx, commands_rx) = mpsc::channel::<Command>(config.core().command_buffer_size());
    let (events_tx, events_rx) = mpsc::channel::<Event>(config.core().event_buffer_size());

    let gateway: Arc<dyn DispatchGateway> = Arc::new(LoggingDispatchGateway);
    let mut store = Store::new(commands_rx, commands_tx.clone(), events_tx, gateway, &config);

    let render_extent = config.viewport().extent();
    let notifier_rx = store.notifier();
    task::spawn(async move {
        store_listener(notifier_rx, render_extent).await;
    });
    info!("✅  Initialized store listener");

    task::spawn(async move {
        notice_listener(events_rx).await;
    });
    info!("✅  Initialized notice listener");

    let mut simulator = TelemetrySimulator::new(&config, commands_tx.clone(), store.notifier());

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    simulator.start()?;
    info!("✅  Started telemetry simulator");

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    operator_console(commands_tx, &simulator, render_extent).await?;

    info!("🪵 Shutting down...");
    simulator.stop().await;

    Ok(())
}
