//! Bestial Landing - Main Entry Point
//!
//! Búscate la vida • con IA

use bestial_landing::app::application::run_app;
use bestial_landing::constants::LOG_FILE_PREFIX;
use bestial_landing::domain::config::LandingConfig;
use bestial_landing::domain::content::PageContent;
use bestial_landing::helpers::{get_or_create_data_dir, is_development};
use bestial_landing::state::settings::LandingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() -> Option<WorkerGuard> {
    let level = if is_development() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Daily log file in the data directory, next to stdout
    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    guard
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting Bestial landing...");

    let settings = LandingSettings::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default settings");
        LandingSettings::default()
    });
    let config = LandingConfig::from_settings(&settings);

    let content = match PageContent::for_variant(config.variant) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(error = %e, variant = config.variant.name(), "Invalid page content");
            std::process::exit(1);
        }
    };

    // Run the GPUI application
    run_app(config, settings, content);
}
