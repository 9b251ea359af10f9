use std::sync::Arc;

use compute_service::{App, LogSink, Logger, ServiceConfig, StartupError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env().map_err(StartupError::from)?;

    let logger = Arc::new(Logger::new(config.log_level));
    if let Some(path) = &config.log_file {
        logger.set_log_file(path).map_err(StartupError::LogFile)?;
    }

    let app = App::bind(&config, logger.clone()).await?;
    if let Err(e) = app.serve().await {
        logger.critical(&format!("server stopped: {}", e));
        return Err(e.into());
    }
    Ok(())
}
