use std::collections::HashMap;
use std::path::PathBuf;

use compute_service::config::{DEFAULT_PORT, DEFAULT_SERVICE_ID};
use compute_service::{ConfigError, LogLevel, ServiceConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.service_id, DEFAULT_SERVICE_ID);
        assert_eq!(config.listen_addr(), "0.0.0.0:2222");
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("COMPUTE_BIND_ADDR", "127.0.0.1"),
            ("COMPUTE_PORT", "0"),
            ("COMPUTE_SERVICE_ID", "compute-service-b"),
            ("COMPUTE_HOST", "compute-b.internal"),
            ("COMPUTE_LOG_LEVEL", "debug"),
            ("COMPUTE_LOG_FILE", "/var/log/compute.log"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:0");
        assert_eq!(config.service_id, "compute-service-b");
        assert_eq!(config.advertised_host, "compute-b.internal");
        assert_eq!(config.log_level, LogLevel::DEBUG);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/compute.log")));
    }

    #[test]
    fn test_advertised_host_defaults_to_bind_addr() {
        let config =
            ServiceConfig::from_lookup(lookup(&[("COMPUTE_BIND_ADDR", "10.1.2.3")])).unwrap();
        assert_eq!(config.advertised_host, "10.1.2.3");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("COMPUTE_PORT", ""),
            ("COMPUTE_LOG_FILE", " "),
        ]))
        .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(
            ServiceConfig::from_lookup(lookup(&[("COMPUTE_PORT", "70000")])),
            Err(ConfigError::InvalidValue {
                var: "COMPUTE_PORT",
                value: "70000".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(matches!(
            ServiceConfig::from_lookup(lookup(&[("COMPUTE_LOG_LEVEL", "chatty")])),
            Err(ConfigError::InvalidValue { var: "COMPUTE_LOG_LEVEL", .. })
        ));
    }
}
