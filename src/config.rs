use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `MESSAGES_LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "MESSAGES_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// sqlx SQLite URL, or `memory` for the in-process store.
    pub database_url: String,
    pub listen_addr: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://messages.db?mode=rwc".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Build the config from defaults and the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_environment() {
        Jail::expect_with(|_jail| {
            assert_eq!(Config::load()?, Config::default());
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("MESSAGES_DATABASE_URL", "memory");
            jail.set_env("MESSAGES_LISTEN_ADDR", "127.0.0.1:9000");

            let cfg = Config::load()?;
            assert_eq!(cfg.database_url, "memory");
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }
}
