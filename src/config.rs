//! Configuration for smckit
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for an SMC client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Service Discovery
    // -------------------------------------------------------------------------
    /// Registry name of the hardware-management service
    pub service_name: String,

    // -------------------------------------------------------------------------
    // Connection
    // -------------------------------------------------------------------------
    /// User-client type passed when opening the service connection
    pub user_client_type: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "AppleSMC".to_string(),
            user_client_type: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the service registry name
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    /// Set the user-client type for the service connection
    pub fn user_client_type(mut self, ty: u32) -> Self {
        self.config.user_client_type = ty;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
