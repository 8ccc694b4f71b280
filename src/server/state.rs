//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned cheaply for each
//! request through Axum's state extraction: the database connection is a
//! pool handle, the mailer wraps a pooled SMTP transport, and the upload
//! service only carries its directory and base URL.

use sea_orm::DatabaseConnection;

use crate::server::service::{mail::Mailer, upload::UploadService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by every repository.
    pub db: DatabaseConnection,

    /// Outbound SMTP mailer for contact and appointment notifications.
    pub mailer: Mailer,

    /// Stored-file management for the upload endpoints.
    pub uploads: UploadService,

    /// Public base URL for generated links.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        mailer: Mailer,
        uploads: UploadService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            mailer,
            uploads,
            app_url,
        }
    }
}
