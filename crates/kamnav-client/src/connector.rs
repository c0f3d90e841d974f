//! Connection lifecycle for the KAM web service client.
//!
//! [`ClientConnector`] owns the active [`HttpKamService`] and applies
//! configuration changes. Reconnection never fails with an error: the
//! outcome is a [`ConnectionStatus`] the caller surfaces to the user.

use kamnav_core::Configuration;

use crate::error::Result;
use crate::http::HttpKamService;

/// Reachability outcome of a reconnect probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The service answered the version probe.
    Connected,
    /// The service could not be reached; carries the reason.
    Unreachable(String),
}

impl ConnectionStatus {
    /// Returns `true` when the service answered.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Holds the active client and reconfigures it.
#[derive(Clone, Debug)]
pub struct ClientConnector {
    config: Configuration,
    service: HttpKamService,
}

impl ClientConnector {
    /// Creates a connector from the given configuration.
    ///
    /// Building the client does not contact the service; call
    /// [`reconnect`](Self::reconnect) or [`probe`](Self::probe) for that.
    pub fn new(config: Configuration) -> Result<Self> {
        let service = HttpKamService::new(&config)?;
        Ok(Self { config, service })
    }

    /// The configuration currently applied.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// A handle to the active service client.
    pub fn service(&self) -> HttpKamService {
        self.service.clone()
    }

    /// Apply a new configuration and report reachability.
    ///
    /// The new configuration is applied whether or not the service is
    /// reachable, matching the settings-dialog flow: save, reconfigure,
    /// then warn if the probe fails. If the client itself cannot be built
    /// the previous one stays active and `Unreachable` is returned.
    pub async fn reconnect(&mut self, config: Configuration) -> ConnectionStatus {
        let service = match HttpKamService::new(&config) {
            Ok(service) => service,
            Err(e) => {
                log::warn!("Could not build client for {}: {e}", config.service_url);
                return ConnectionStatus::Unreachable(e.to_string());
            }
        };

        self.config = config;
        self.service = service;
        self.probe().await
    }

    /// Probe the active service without changing configuration.
    pub async fn probe(&self) -> ConnectionStatus {
        match self.service.version().await {
            Ok(version) => {
                log::info!(
                    "Connected to KAM service {} (version {version})",
                    self.service.base_url()
                );
                ConnectionStatus::Connected
            }
            Err(e) => {
                log::warn!("KAM service {} unreachable: {e}", self.service.base_url());
                ConnectionStatus::Unreachable(e.to_string())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_unreachable_reports_not_errors() {
        let config = Configuration::new("http://127.0.0.1:9/", 5);
        let connector = ClientConnector::new(config).unwrap();

        let status = connector.probe().await;
        assert!(!status.is_connected());
        assert!(matches!(status, ConnectionStatus::Unreachable(_)));
    }

    #[tokio::test]
    async fn test_reconnect_applies_config_even_when_unreachable() {
        let connector = ClientConnector::new(Configuration::default()).unwrap();
        let mut connector = connector;

        let new_config = Configuration::new("http://127.0.0.1:9/", 10);
        let status = connector.reconnect(new_config.clone()).await;

        assert!(!status.is_connected());
        assert_eq!(connector.config(), &new_config);
        assert_eq!(connector.service().base_url(), "http://127.0.0.1:9");
    }
}
