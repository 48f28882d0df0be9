use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file holding the entire submission store.
    pub store_file: PathBuf,
    /// Where uploaded ZIP archives land.
    pub upload_dir: PathBuf,
    /// Where generated score workbooks land.
    pub export_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("auth.admin_username", "admin")?
            .set_default("auth.admin_password", "admin123")?
            .set_default("auth.jwt_secret", "hackathon-secret-change-in-production")?
            .set_default("storage.store_file", "evaluations/submissions.json")?
            .set_default("storage.upload_dir", "submissions")?
            .set_default("storage.export_dir", "evaluations")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., HACKATHON__AUTH__ADMIN_PASSWORD)
            .add_source(Environment::with_prefix("HACKATHON").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
