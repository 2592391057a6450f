//! Shot Timer GUI - Main entry point
//!
//! Loads the settings file, initializes logging, and launches the iced
//! application.

use std::path::PathBuf;

use iced::Size;

use stg_core::config::ConfigManager;
use stg_core::logging::{init_tracing_with_file, LogLevel};

mod app;
mod clipboard;
mod pages;
mod theme;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for the logs directory path)
    let config_path = default_config_path();
    let mut config = ConfigManager::new(&config_path);

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }
    if let Err(e) = config.ensure_dirs_exist() {
        eprintln!("Warning: Failed to create directories: {}", e);
    }

    let level = LogLevel::from_config(&config.settings().logging.level);
    let _log_guard = init_tracing_with_file(level, &config.logs_folder());

    tracing::info!("Shot Timer GUI starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", stg_core::version());

    let settings = config.settings().clone();

    iced::application(move || App::boot(&settings), App::update, App::view)
        .title("Shot Timer")
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(Size::new(560.0, 760.0))
        .run()
}
