use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_UPLOAD_DIR: &str = "./uploads";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Public base URL used for upload links and the sitemap.
    pub app_url: String,
    pub upload_dir: String,
    /// Enables secure cookies. Driven by `APP_ENV=production`.
    pub production: bool,

    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    /// Recipient of contact and appointment notifications.
    pub mail_to: String,

    pub admin_username: String,
    /// Plaintext bootstrap password, only consulted when no admin row exists.
    pub admin_password: Option<String>,

    pub form_rate_limit_per_second: u64,
    pub form_rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            port: parse_or("PORT", DEFAULT_PORT)?,
            app_url: optional("APP_URL").unwrap_or_else(|| "http://localhost:4000".to_string()),
            upload_dir: optional("UPLOAD_PATH").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            production: optional("APP_ENV").as_deref() == Some("production"),
            smtp_host: require("SMTP_HOST")?,
            smtp_port: parse_or("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            smtp_user: require("SMTP_USER")?,
            smtp_pass: require("SMTP_PASS")?,
            mail_to: require("ADMIN_EMAIL_TO")?,
            admin_username: optional("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: optional("ADMIN_PASSWORD"),
            // The form limiter ships with an effectively unbounded ceiling;
            // tighten it per deployment through these variables.
            form_rate_limit_per_second: parse_or("FORM_RATE_LIMIT_PER_SECOND", 1)?,
            form_rate_limit_burst: parse_or("FORM_RATE_LIMIT_BURST", 999_999)?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string())),
        Err(_) => Ok(default),
    }
}
