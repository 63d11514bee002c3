//! Server configuration from the environment.
//!
//! All settings come from environment variables with defaults suitable for
//! local development. The catalogue backend is fixed here at startup; there
//! is no per-request backend switching.

use std::str::FromStr;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `CATALOGUE_BACKEND` named an unknown backend.
    #[error("unknown catalogue backend: {value} (expected local, remote, or stub)")]
    UnknownBackend { value: String },
}

/// Which catalogue implementation serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogueBackend {
    /// The embedded SQLite store.
    #[default]
    Local,
    /// The remote fake-store API.
    Remote,
    /// The placeholder backend; every operation fails.
    Stub,
}

impl FromStr for CatalogueBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "stub" => Ok(Self::Stub),
            other => Err(ConfigError::UnknownBackend {
                value: other.to_owned(),
            }),
        }
    }
}

/// Runtime settings for the catalogue server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// SQLite database path for the local backend.
    pub database_url: String,
    /// Catalogue backend serving requests.
    pub backend: CatalogueBackend,
    /// Base URL of the remote catalogue API.
    pub fakestore_base_url: String,
    /// Razorpay API key id.
    pub razorpay_key_id: String,
    /// Razorpay API key secret.
    pub razorpay_key_secret: String,
    /// URL the payment provider redirects to after payment.
    pub payment_callback_url: String,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `CATALOGUE_BACKEND` is set to an unknown
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup. Split out so
    /// tests can supply variables without touching the process environment.
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match lookup("CATALOGUE_BACKEND") {
            Some(value) => value.parse()?,
            None => CatalogueBackend::default(),
        };
        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_owned()),
            database_url: lookup("CATALOGUE_DATABASE_URL")
                .unwrap_or_else(|| "catalogue.db".to_owned()),
            backend,
            fakestore_base_url: lookup("FAKESTORE_BASE_URL")
                .unwrap_or_else(|| "https://fakestoreapi.com".to_owned()),
            razorpay_key_id: lookup("RAZORPAY_KEY_ID").unwrap_or_default(),
            razorpay_key_secret: lookup("RAZORPAY_KEY_SECRET").unwrap_or_default(),
            payment_callback_url: lookup("PAYMENT_CALLBACK_URL")
                .unwrap_or_else(|| "http://localhost:8080/razorpayWebHook/".to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).expect("defaults are valid");

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.database_url, "catalogue.db");
        assert_eq!(config.backend, CatalogueBackend::Local);
        assert_eq!(config.fakestore_base_url, "https://fakestoreapi.com");
    }

    #[rstest]
    #[case("local", CatalogueBackend::Local)]
    #[case("REMOTE", CatalogueBackend::Remote)]
    #[case("stub", CatalogueBackend::Stub)]
    fn backend_parses_case_insensitively(
        #[case] value: &str,
        #[case] expected: CatalogueBackend,
    ) {
        let config = config_from(&[("CATALOGUE_BACKEND", value)]).expect("known backend");
        assert_eq!(config.backend, expected);
    }

    #[rstest]
    fn unknown_backends_are_rejected() {
        let err = config_from(&[("CATALOGUE_BACKEND", "mongo")]).expect_err("unknown");
        assert_eq!(
            err,
            ConfigError::UnknownBackend {
                value: "mongo".to_owned()
            }
        );
    }
}
