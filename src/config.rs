pub struct Config {
    pub database_url: String,
    pub listen_address: String,
    pub renderer_url: String,
    pub storage_bucket_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            listen_address: std::env::var("LISTEN_ADDRESS")?,
            renderer_url: std::env::var("RENDERER_URL")?,
            storage_bucket_url: std::env::var("STORAGE_BUCKET_URL")?,
        })
    }
}
