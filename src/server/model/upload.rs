use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::server::service::upload::{FileEntry, StoredFile};

/// Metadata returned for a freshly stored file.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileDto {
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    pub mimetype: String,
    pub url: String,
    pub path: String,
}

impl From<StoredFile> for UploadedFileDto {
    fn from(file: StoredFile) -> Self {
        Self {
            filename: file.filename,
            original_name: file.original_name,
            size: file.size,
            mimetype: file.mimetype,
            url: file.url,
            path: file.path,
        }
    }
}

/// Listing entry for a file already on disk.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredFileDto {
    pub filename: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub path: String,
}

impl From<FileEntry> for StoredFileDto {
    fn from(entry: FileEntry) -> Self {
        Self {
            filename: entry.filename,
            size: entry.size,
            created_at: entry.created_at,
            url: entry.url,
            path: entry.path,
        }
    }
}

/// Single-upload response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadDto {
    pub ok: bool,
    pub message: String,
    pub file: UploadedFileDto,
}

/// Multi-upload response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct MultiUploadDto {
    pub ok: bool,
    pub message: String,
    pub files: Vec<UploadedFileDto>,
}

/// Upload listing response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct FileListDto {
    pub ok: bool,
    pub count: usize,
    pub files: Vec<StoredFileDto>,
}
