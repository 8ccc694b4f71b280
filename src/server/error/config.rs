use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set. Check `.env.example` for
    /// the full list of configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Environment variable {0} has an invalid value")]
    InvalidEnvVar(String),
}
