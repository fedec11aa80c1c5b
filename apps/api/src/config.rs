//! Configuration for the Product API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Seed the store with a demo catalog on startup (SEED_DEMO_DATA, default true)
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let seed_demo_data = env_or_default("SEED_DEMO_DATA", "true")
            .eq_ignore_ascii_case("true");

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_demo_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_seed_demo_data_on() {
        temp_env::with_var_unset("SEED_DEMO_DATA", || {
            let config = Config::from_env().unwrap();
            assert!(config.seed_demo_data);
        });
    }

    #[test]
    fn test_config_seed_demo_data_disabled() {
        temp_env::with_var("SEED_DEMO_DATA", Some("false"), || {
            let config = Config::from_env().unwrap();
            assert!(!config.seed_demo_data);
        });
    }
}
