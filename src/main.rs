use anyhow::Context;
use paydesk::config::{AppConfig, load_env};

fn main() -> anyhow::Result<()> {
    let env_loaded = load_env();
    let config = AppConfig::from_env().context("failed to load configuration")?;
    paydesk::logging::init(&config.log_filter);
    if let Err(err) = env_loaded {
        tracing::warn!(error = %err, "failed to load bundled config, using built-in defaults");
    }
    tracing::info!(endpoint = %config.chat_endpoint, "starting paydesk");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(paydesk::ui::App);
    Ok(())
}
