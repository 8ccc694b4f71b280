use axum::{extract::State, http::header, response::IntoResponse};

use crate::server::{error::AppError, service::sitemap::SitemapService, state::AppState};

/// Search-engine sitemap over all content tables.
///
/// Safe to cache; the document only changes when content does.
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = "seo",
    responses(
        (status = 200, description = "Sitemap XML", body = String, content_type = "application/xml"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let xml = SitemapService::new(&state.db)
        .build_sitemap(&state.app_url)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        xml,
    ))
}

/// Robots exclusion document.
#[utoipa::path(
    get,
    path = "/robots.txt",
    tag = "seo",
    responses((status = 200, description = "robots.txt", body = String, content_type = "text/plain")),
)]
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        SitemapService::build_robots(&state.app_url),
    )
}
