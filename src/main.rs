use anyhow::Result;
use plugin_toolbar::config::SessionConfig;
use plugin_toolbar::session;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting plugin toolbar...");

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => SessionConfig::load(&path)?,
        None => SessionConfig::load_default()?,
    };

    let view = session::render(&config).await?;

    println!("{}", serde_json::to_string_pretty(view.visible())?);
    Ok(())
}
