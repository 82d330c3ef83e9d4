/// Runtime configuration resolved from `HEARTH_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// SQLite database file path.
    pub db_path: String,
    /// Shared API key. `None` means no key is configured and every
    /// guarded route denies.
    pub api_key: Option<String>,
    /// Tenant used when a request does not name one.
    pub default_tenant: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("HEARTH_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let db_path =
            std::env::var("HEARTH_DB_PATH").unwrap_or_else(|_| "data/hearth.db".to_string());
        let api_key = std::env::var("HEARTH_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let default_tenant =
            std::env::var("HEARTH_DEFAULT_TENANT").unwrap_or_else(|_| "main".to_string());

        Self {
            listen_addr,
            db_path,
            api_key,
            default_tenant,
        }
    }
}
