//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::num::NonZeroUsize;

use rich_backend::settings::{ServerSettings, SettingsError};

/// Validated listener configuration for [`super::create_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) workers: Option<NonZeroUsize>,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` with Actix's default
    /// worker count.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            workers: None,
        }
    }

    /// Override the number of worker threads.
    #[must_use]
    pub fn with_workers(mut self, workers: Option<NonZeroUsize>) -> Self {
        self.workers = workers;
        self
    }

    /// Validate loaded settings into a server configuration.
    ///
    /// # Errors
    /// Propagates [`SettingsError`] for an unusable host or worker count.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_addr()?).with_workers(settings.workers()?))
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Read by unit tests; the server destructures the config")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
