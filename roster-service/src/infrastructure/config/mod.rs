use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub staff_service: StaffServiceSettings,
    pub solver: SolverSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaffServiceSettings {
    pub url: String,
}

/// Configured ceilings surfaced in startup logs. The generator (§4.6,
/// §9 "Solver timeout budgeting") hardcodes its own 60s/10s budgets
/// rather than reading these back — these exist so ops can see the
/// deployed ceiling, not so a human can retune solve behavior.
#[derive(Debug, Deserialize, Clone)]
pub struct SolverSettings {
    pub primary_timeout_ms: u64,
    pub relaxation_timeout_ms: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
