use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub log_level: String,
}

impl Config {
    /// Every variable has a local-development default, so a bare environment
    /// still produces a usable config. `DATABASE_URL` wins over the
    /// individual `DB_*` parts when both are set.
    pub fn from_env() -> Result<Self, String> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let db_host = env_or("DB_HOST", "localhost");
                let db_port: u16 = env_or("DB_PORT", "5432")
                    .parse()
                    .map_err(|e| format!("Invalid DB_PORT: {e}"))?;
                let db_name = env_or("DB_NAME", "api");
                let db_user = env_or("DB_USER", "api_user");
                let db_password = env_or("DB_PASSWORD", "api_pass");
                format!("postgres://{db_user}:{db_password}@{db_host}:{db_port}/{db_name}")
            }
        };

        let host: IpAddr = env_or("USERS_API_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid USERS_API_HOST: {e}"))?;

        let port: u16 = env_or("USERS_API_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid USERS_API_PORT: {e}"))?;

        let base_url = env_or("USERS_API_BASE_URL", &format!("http://{host}:{port}"));

        let log_level = env_or("USERS_API_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            base_url,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
