use crate::server::error::config::ConfigError;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Administrator credentials provisioned at startup.
///
/// This is the only path to the admin role: registration and purchase fulfillment always
/// create students.
#[derive(Clone)]
pub struct AdminSeed {
    /// Normalised (trimmed, lowercased)
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Runtime configuration read from the environment.
///
/// Every secret the server depends on is required; the server refuses to start
/// rather than running with an empty webhook token or database URL.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Shared token Hotmart includes in every webhook delivery
    pub hotmart_hottok: String,
    /// Set when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are configured
    pub admin: Option<AdminSeed>,
    pub server_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            let value = lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;

            if value.trim().is_empty() {
                return Err(ConfigError::InvalidEnvValue {
                    var: name.to_string(),
                    reason: "value must not be empty".to_string(),
                });
            }

            Ok(value)
        };

        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email: email.trim().to_lowercase(),
                password,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "ADMIN_PASSWORD".to_string(),
                    reason: "required when ADMIN_EMAIL is set".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "ADMIN_EMAIL".to_string(),
                    reason: "required when ADMIN_PASSWORD is set".to_string(),
                })
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            hotmart_hottok: required("HOTMART_HOTTOK")?,
            admin,
            server_address: optional("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
        })
    }
}
