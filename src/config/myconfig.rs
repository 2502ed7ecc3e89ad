use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub cors_origin: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            Err(_) => 5000,
        };

        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let run_migrations = match std::env::var("RUN_MIGRATIONS") {
            Ok(raw) => match raw.as_str() {
                "true" => true,
                "false" => false,
                other => {
                    return Err(anyhow!(
                        "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'"
                    ));
                }
            },
            Err(_) => false,
        };

        Ok(Self {
            port,
            database_url,
            cors_origin,
            run_migrations,
        })
    }
}
