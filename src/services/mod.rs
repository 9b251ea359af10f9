pub mod compute;
pub mod service_registry;

pub use compute::{AddParams, AddService, ADD_ROUTE};
pub use service_registry::{DiscoveryClient, Registration, ServiceRegistry};
