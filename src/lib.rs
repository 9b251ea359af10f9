pub mod app;
pub mod config;
pub mod error;
pub mod network;
pub mod services;
pub mod utils;

pub use app::App;
pub use config::ServiceConfig;
pub use error::{ConfigError, ErrorKind, ServiceError, StartupError};
pub use network::TcpServer;
pub use services::{AddParams, AddService, DiscoveryClient, Registration, ServiceRegistry};
pub use utils::{LogLevel, LogSink, Logger};
