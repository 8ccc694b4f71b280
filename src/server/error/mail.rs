use thiserror::Error;

/// Failures while assembling or delivering notification mail.
#[derive(Error, Debug)]
pub enum MailError {
    /// SMTP transport-level failure (connection, authentication, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The sender or recipient address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(#[from] lettre::error::Error),
}
