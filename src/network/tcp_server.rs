use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::StartupError;
use crate::utils::LogSink;

/// Listening socket plus the HTTP server driving it.
pub struct TcpServer {
    listener: TcpListener,
    logger: Arc<dyn LogSink>,
}

impl TcpServer {
    pub async fn bind(addr: &str, logger: Arc<dyn LogSink>) -> Result<Self, StartupError> {
        let listener = TcpListener::bind(addr).await.map_err(|source| StartupError::Bind {
            addr: addr.to_string(),
            source,
        })?;
        Ok(TcpServer { listener, logger })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves `app` until the process exits. Failed accepts (fd exhaustion,
    /// aborted handshakes) are retried by the server instead of ending the loop.
    pub async fn serve(self, app: Router) -> std::io::Result<()> {
        if let Ok(addr) = self.local_addr() {
            self.logger.info(&format!("Server listening on {}", addr));
        }
        axum::serve(self.listener, app).await
    }
}
