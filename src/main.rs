mod config;
mod gui;
mod message;

use config::AppearanceConfig;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppearanceConfig::load();

    gui::launch(config).inspect_err(|e| {
        tracing::error!("无法打开错误提示窗口: {e}");
    })
}
