use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// SQLite connection URL for the movie catalog store
    #[serde(default = "default_catalog_database_url")]
    pub catalog_database_url: String,

    /// SQLite connection URL for the identity provider's store
    #[serde(default = "default_identity_database_url")]
    pub identity_database_url: String,

    /// Expected `iss` claim on bearer tokens
    pub jwt_issuer: String,

    /// Expected `aud` claim on bearer tokens
    pub jwt_audience: String,

    /// HMAC-SHA256 secret used to verify bearer tokens
    pub jwt_key: String,

    /// Base URL of the poster asset host
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,

    /// Opaque API key passed through from the environment. Nothing in this
    /// service consumes it; it is carried as configuration only.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_database_url() -> String {
    "sqlite://movies.db".to_string()
}

fn default_identity_database_url() -> String {
    "sqlite://identity.db".to_string()
}

fn default_poster_base_url() -> String {
    "https://posters.example.com/posters".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
