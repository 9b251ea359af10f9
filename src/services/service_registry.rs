use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::ServiceError;

/// Address and identity a service announced to discovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub service_id: String,
    pub host: String,
    pub port: u16,
}

impl Registration {
    pub fn new(service_id: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Registration {
            service_id: service_id.into(),
            host: host.into(),
            port,
        }
    }
}

/// Read access to this process's own registration.
pub trait DiscoveryClient: Send + Sync {
    fn local_registration(&self) -> Result<Registration, ServiceError>;
}

/// A fixed registration handed over at startup.
impl DiscoveryClient for Registration {
    fn local_registration(&self) -> Result<Registration, ServiceError> {
        Ok(self.clone())
    }
}

/// In-process discovery registry keyed by service id.
pub struct ServiceRegistry {
    services: RwLock<HashMap<String, Vec<Registration>>>,
    local: RwLock<Option<Registration>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        ServiceRegistry {
            services: RwLock::new(HashMap::new()),
            local: RwLock::new(None),
        }
    }

    pub fn register(&self, registration: Registration) {
        let mut services = self.services.write();
        services
            .entry(registration.service_id.clone())
            .or_default()
            .push(registration);
    }

    /// Registers `registration` and records it as this process's own.
    pub fn register_local(&self, registration: Registration) {
        self.register(registration.clone());
        *self.local.write() = Some(registration);
    }

    pub fn deregister(&self, service_id: &str, host: &str, port: u16) {
        let matches =
            |r: &Registration| r.service_id == service_id && r.host == host && r.port == port;

        {
            let mut services = self.services.write();
            if let Some(instances) = services.get_mut(service_id) {
                instances.retain(|instance| !matches(instance));
                if instances.is_empty() {
                    services.remove(service_id);
                }
            }
        }

        let mut local = self.local.write();
        if local.as_ref().is_some_and(matches) {
            *local = None;
        }
    }

    pub fn instances(&self, service_id: &str) -> Vec<Registration> {
        self.services.read().get(service_id).cloned().unwrap_or_default()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        ServiceRegistry::new()
    }
}

impl DiscoveryClient for ServiceRegistry {
    fn local_registration(&self) -> Result<Registration, ServiceError> {
        self.local.read().clone().ok_or(ServiceError::RegistrationUnavailable)
    }
}
