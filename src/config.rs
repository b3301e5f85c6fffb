use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub seed_users: usize,
    pub log_level: String,
}

/// Which `UserStore` implementation serves requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backend {
    Postgres,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let backend = match env_or("ACCOUNTD_BACKEND", "postgres").as_str() {
            "postgres" => Backend::Postgres,
            "memory" => Backend::Memory,
            other => return Err(format!("Invalid ACCOUNTD_BACKEND: {other}")),
        };

        // Only the persistent backend needs a connection descriptor.
        let database_url = match backend {
            Backend::Postgres => Some(env_required("DATABASE_URL")?),
            Backend::Memory => std::env::var("DATABASE_URL").ok(),
        };

        let host: IpAddr = env_or("ACCOUNTD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ACCOUNTD_HOST: {e}"))?;

        let port: u16 = env_or("ACCOUNTD_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid ACCOUNTD_PORT: {e}"))?;

        let seed_users: usize = env_or("ACCOUNTD_SEED_USERS", "0")
            .parse()
            .map_err(|e| format!("Invalid ACCOUNTD_SEED_USERS: {e}"))?;

        let log_level = env_or("ACCOUNTD_LOG_LEVEL", "info");

        Ok(Config {
            backend,
            database_url,
            host,
            port,
            seed_users,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
