//! Stored-file management for the upload endpoints.
//!
//! Files keep their original extension but get a collision-resistant
//! generated name (millisecond timestamp plus a random token), are written
//! under the configured directory, and are served back under `/uploads/`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::server::error::AppError;

/// Largest accepted upload, in bytes.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum number of files accepted by the multi-upload endpoint.
pub const MAX_FILES_PER_REQUEST: usize = 10;

#[derive(Clone)]
pub struct UploadService {
    dir: PathBuf,
    base_url: String,
}

/// Metadata for a file that was just written.
pub struct StoredFile {
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    pub mimetype: String,
    pub url: String,
    pub path: String,
}

/// Metadata for a file already on disk.
pub struct FileEntry {
    pub filename: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub path: String,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Writes the file under a generated name and returns its metadata.
    pub async fn store(
        &self,
        original_name: &str,
        mimetype: &str,
        data: &[u8],
    ) -> Result<StoredFile, AppError> {
        let filename = generate_filename(original_name);
        tokio::fs::write(self.dir.join(&filename), data).await?;

        Ok(StoredFile {
            original_name: original_name.to_string(),
            size: data.len() as u64,
            mimetype: mimetype.to_string(),
            url: self.public_url(&filename),
            path: format!("/uploads/{filename}"),
            filename,
        })
    }

    /// Removes the named file. NotFound when it does not exist; names with
    /// path separators are rejected outright.
    pub async fn delete(&self, filename: &str) -> Result<(), AppError> {
        if !is_safe_filename(filename) {
            return Err(AppError::BadRequest("Invalid filename".to_string()));
        }

        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound("File not found".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Enumerates stored files with size and creation time.
    pub async fn list(&self) -> Result<Vec<FileEntry>, AppError> {
        let mut dir = tokio::fs::read_dir(&self.dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = dir.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().into_owned();
            // Creation time is not available on every filesystem.
            let created = metadata.created().or_else(|_| metadata.modified())?;

            files.push(FileEntry {
                size: metadata.len(),
                created_at: created.into(),
                url: self.public_url(&filename),
                path: format!("/uploads/{filename}"),
                filename,
            });
        }

        Ok(files)
    }

    fn public_url(&self, filename: &str) -> String {
        format!("{}/uploads/{}", self.base_url, filename)
    }
}

fn generate_filename(original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let token: u128 = rand::rng().random();

    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{timestamp}-{token:032x}.{ext}"),
        None => format!("{timestamp}-{token:032x}"),
    }
}

fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_preserve_the_extension() {
        let name = generate_filename("scan.result.pdf");
        assert!(name.ends_with(".pdf"));
        assert!(!name.contains("scan"));

        let name = generate_filename("README");
        assert!(!name.contains('.'));
    }

    #[test]
    fn generated_names_do_not_collide() {
        let a = generate_filename("a.jpg");
        let b = generate_filename("a.jpg");
        assert_ne!(a, b);
    }

    #[test]
    fn unsafe_filenames_are_rejected() {
        assert!(is_safe_filename("1700000000-abc123.jpg"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename("../etc/passwd"));
        assert!(!is_safe_filename("nested/file.jpg"));
        assert!(!is_safe_filename("back\\slash.jpg"));
    }

    #[tokio::test]
    async fn store_delete_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(dir.path(), "http://localhost:4000");

        let stored = service
            .store("photo.jpg", "image/jpeg", b"not really a jpeg")
            .await
            .unwrap();
        assert_eq!(stored.original_name, "photo.jpg");
        assert_eq!(stored.size, 17);
        assert!(stored.url.ends_with(&stored.filename));
        assert!(stored.filename.ends_with(".jpg"));

        let files = service.list().await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, stored.filename);
        assert_eq!(files[0].size, 17);

        service.delete(&stored.filename).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());

        // Second delete reports NotFound.
        let err = service.delete(&stored.filename).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(dir.path(), "http://localhost:4000");

        let err = service.delete("../outside.txt").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
