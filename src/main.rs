use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use log::info;

use motionlog::{
    ConsoleDisplay, DisplaySink, LogAppender, SessionController, SettingsStore, SimulatedSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("motionlog starting up...");

    let data_dir = std::env::current_dir()?;
    let settings = SettingsStore::new(data_dir.join("settings.json"))?.tracker();

    let source = Arc::new(SimulatedSource::new().with_tick(Duration::from_millis(500)));
    let display: Arc<Mutex<dyn DisplaySink>> = Arc::new(Mutex::new(ConsoleDisplay));
    let appender = LogAppender::new(data_dir.join(&settings.log_file_name));

    let mut controller = SessionController::new(source, display, appender.clone())
        .with_motion_interval(settings.motion_interval());

    controller.toggle().await?;
    tokio::time::sleep(Duration::from_secs(5)).await;
    controller.toggle().await?;

    let lines = std::fs::read_to_string(appender.path())
        .map(|contents| contents.lines().count())
        .unwrap_or(0);
    info!("session finished, {lines} records in {}", appender.path().display());

    Ok(())
}
