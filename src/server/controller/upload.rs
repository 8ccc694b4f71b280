use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::AppError,
        model::upload::{FileListDto, MultiUploadDto, UploadDto, UploadedFileDto},
        service::upload::{MAX_FILES_PER_REQUEST, MAX_FILE_SIZE},
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Upload a single file.
///
/// Accepts any content type up to 10 MiB. The stored name is generated
/// (timestamp plus random token) with the original extension preserved, and
/// the file becomes reachable under `/uploads/`.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file sent or file too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // The form field is named "file"; fields without a filename are
        // ordinary form values.
        if field.file_name().is_none() {
            continue;
        }

        let original_name = field.file_name().unwrap_or("file").to_string();
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::BadRequest(
                "File exceeds the 10 MiB size limit".to_string(),
            ));
        }

        let stored = state.uploads.store(&original_name, &mimetype, &data).await?;

        return Ok(Json(UploadDto {
            ok: true,
            message: "File uploaded successfully".to_string(),
            file: UploadedFileDto::from(stored),
        }));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

/// Upload up to ten files in one request.
#[utoipa::path(
    post,
    path = "/api/upload/multiple",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Files stored", body = MultiUploadDto),
        (status = 400, description = "No files sent, too many files, or a file too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.file_name().is_none() {
            continue;
        }

        if files.len() == MAX_FILES_PER_REQUEST {
            return Err(AppError::BadRequest(format!(
                "At most {MAX_FILES_PER_REQUEST} files can be uploaded at once"
            )));
        }

        let original_name = field.file_name().unwrap_or("file").to_string();
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::BadRequest(
                "File exceeds the 10 MiB size limit".to_string(),
            ));
        }

        let stored = state.uploads.store(&original_name, &mimetype, &data).await?;
        files.push(UploadedFileDto::from(stored));
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    }

    Ok(Json(MultiUploadDto {
        ok: true,
        message: format!("{} files uploaded successfully", files.len()),
        files,
    }))
}

/// List stored files with size and creation time.
#[utoipa::path(
    get,
    path = "/api/upload/list",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Stored files", body = FileListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_files(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let files: Vec<_> = state
        .uploads
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(FileListDto {
        ok: true,
        count: files.len(),
        files,
    }))
}

/// Delete a stored file by name.
#[utoipa::path(
    delete,
    path = "/api/upload/{filename}",
    tag = UPLOAD_TAG,
    params(("filename" = String, Path, description = "Stored filename")),
    responses(
        (status = 200, description = "File deleted", body = MessageDto),
        (status = 400, description = "Invalid filename", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
)]
pub async fn delete_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.uploads.delete(&filename).await?;

    Ok(Json(MessageDto::new("File deleted successfully")))
}
