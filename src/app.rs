use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;

use crate::config::ServiceConfig;
use crate::error::StartupError;
use crate::network::TcpServer;
use crate::services::{AddService, Registration, ServiceRegistry};
use crate::utils::LogSink;

/// A bound, registered service ready to serve.
pub struct App {
    server: TcpServer,
    router: Router,
    registry: Arc<ServiceRegistry>,
    local_addr: SocketAddr,
}

impl App {
    /// Binds the listener, registers this instance under its bound port and
    /// builds the route table.
    pub async fn bind(
        config: &ServiceConfig,
        logger: Arc<dyn LogSink>,
    ) -> Result<Self, StartupError> {
        let server = TcpServer::bind(&config.listen_addr(), Arc::clone(&logger)).await?;
        let local_addr = server.local_addr().map_err(|source| StartupError::Bind {
            addr: config.listen_addr(),
            source,
        })?;

        let registry = Arc::new(ServiceRegistry::new());
        let registration = Registration::new(
            config.service_id.clone(),
            config.advertised_host.clone(),
            local_addr.port(),
        );
        logger.info(&format!(
            "registered {} at {}:{}",
            registration.service_id, registration.host, registration.port
        ));
        registry.register_local(registration);

        let add_service = Arc::new(AddService::new(registry.clone(), Arc::clone(&logger)));
        let router = add_service.router();

        Ok(App {
            server,
            router,
            registry,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn registry(&self) -> Arc<ServiceRegistry> {
        Arc::clone(&self.registry)
    }

    pub async fn serve(self) -> std::io::Result<()> {
        self.server.serve(self.router).await
    }
}
