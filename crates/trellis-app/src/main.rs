mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use trellis_config::TrellisConfig;
use trellis_platform::KeybindRegistry;

use app_state::session::SessionStore;
use app_state::TrellisApp;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = trellis_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Trellis crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-----------------------\n");

        default_hook(info);
    }));
}

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn log_filter(cli_level: Option<&str>, config: &TrellisConfig) -> EnvFilter {
    cli_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(config.logging.level.as_filter()))
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging depends on the config, so load first and report afterwards.
    let loaded = match &args.config {
        Some(path) => trellis_config::load_config_from(path),
        None => trellis_config::load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (TrellisConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log_level.as_deref(), &config))
        .init();

    tracing::info!("Trellis v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!("Effective config: {}", trellis_config::config_to_json(&config));

    if let Err(e) = trellis_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let store = match args.session.clone() {
        Some(path) => Some(SessionStore::new(path)),
        None => match trellis_platform::paths::session_file() {
            Ok(path) => Some(SessionStore::new(path)),
            Err(e) => {
                tracing::warn!("Session persistence disabled: {e}");
                None
            }
        },
    };
    let restore = config.session.restore && !args.fresh;

    let registry = KeybindRegistry::from_config(&config.keybinds, &config.hints);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = TrellisApp::new(config, registry, store, restore, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_overrides_config() {
        let config = TrellisConfig::default();
        let filter = log_filter(Some("trellis=trace"), &config);
        assert_eq!(filter.to_string(), "trellis=trace");
    }
}
