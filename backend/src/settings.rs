//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags (`--host`, `--port`, `--json-logs`,
//! `--workers`), `RICH_*` environment variables and configuration files, in
//! the precedence OrthoConfig applies.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Failures turning raw settings into usable values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The host is not an IP address literal.
    #[error("invalid listen host {host:?}: expected an IP address")]
    InvalidHost {
        /// Offending value.
        host: String,
    },
    /// A worker count of zero was requested.
    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

/// Configuration values controlling the HTTP listener and log output.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RICH")]
pub struct ServerSettings {
    /// Listen address; defaults to `0.0.0.0`.
    pub host: Option<String>,
    /// Listen port; defaults to `8080`.
    pub port: Option<u16>,
    /// Emit JSON log lines instead of compact text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Worker thread override; Actix picks a default when unset.
    pub workers: Option<usize>,
}

impl ServerSettings {
    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP
    /// address.
    ///
    /// # Examples
    /// ```
    /// use rich_backend::settings::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     host: Some("127.0.0.1".into()),
    ///     port: None,
    ///     json_logs: false,
    ///     workers: None,
    /// };
    /// assert_eq!(settings.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| SettingsError::InvalidHost {
                    host: raw.to_owned(),
                })?,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Resolve the worker count override, if any.
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroWorkers`] when `workers` is `0`.
    pub fn workers(&self) -> Result<Option<NonZeroUsize>, SettingsError> {
        self.workers
            .map(|count| NonZeroUsize::new(count).ok_or(SettingsError::ZeroWorkers))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = ["RICH_HOST", "RICH_PORT", "RICH_JSON_LOGS", "RICH_WORKERS"];

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("rich-backend"))
            .chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    fn settings(host: Option<&str>, port: Option<u16>) -> ServerSettings {
        ServerSettings {
            host: host.map(str::to_owned),
            port,
            json_logs: false,
            workers: None,
        }
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&[]);
        assert!(!settings.json_logs);
        assert!(settings.host.is_none());
        assert!(settings.port.is_none());
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.workers().expect("no override"), None);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("RICH_HOST", Some("127.0.0.1".to_owned())),
            ("RICH_PORT", Some("9090".to_owned())),
            ("RICH_JSON_LOGS", Some("true".to_owned())),
            ("RICH_WORKERS", Some("2".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert!(settings.json_logs);
        assert_eq!(
            settings.bind_addr().expect("valid address"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
        assert_eq!(settings.workers().expect("valid count"), NonZeroUsize::new(2));
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([
            ("RICH_HOST", None::<String>),
            ("RICH_PORT", Some("9090".to_owned())),
            ("RICH_JSON_LOGS", None::<String>),
            ("RICH_WORKERS", None::<String>),
        ]);

        let settings = load_from_args(&["--port", "7070"]);
        assert_eq!(settings.port, Some(7070));
    }

    #[rstest]
    #[case(None, None, "0.0.0.0:8080")]
    #[case(Some(""), Some(3000), "0.0.0.0:3000")]
    #[case(Some(" 10.0.0.5 "), None, "10.0.0.5:8080")]
    #[case(Some("::1"), Some(8081), "[::1]:8081")]
    fn bind_addr_applies_defaults(
        #[case] host: Option<&str>,
        #[case] port: Option<u16>,
        #[case] expected: &str,
    ) {
        let addr = settings(host, port).bind_addr().expect("valid address");
        assert_eq!(addr.to_string(), expected);
    }

    #[rstest]
    fn bind_addr_rejects_hostnames() {
        let err = settings(Some("localhost"), None)
            .bind_addr()
            .expect_err("hostnames are not accepted");
        assert_eq!(
            err,
            SettingsError::InvalidHost {
                host: "localhost".to_owned()
            }
        );
    }

    #[rstest]
    fn zero_workers_is_rejected() {
        let mut value = settings(None, None);
        value.workers = Some(0);
        assert_eq!(value.workers(), Err(SettingsError::ZeroWorkers));
    }
}
