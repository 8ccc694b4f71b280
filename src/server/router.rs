//! Axum route configuration and API documentation.
//!
//! Mounts every controller, the Swagger UI, and the static file service for
//! uploads. The contact and appointment forms sit behind a per-IP governor
//! whose ceiling comes from configuration.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{ErrorDto, HealthDto, MessageDto},
    server::{
        config::Config,
        controller::{
            auth, contact, education, faq, health, innovation, media, news, project, research,
            sitemap, sponsor, team, treatment, upload,
        },
        error::AppError,
        model::{
            auth::{AdminDto, LoginDto, LoginResponseDto, SessionDto},
            education::{CreateEducationDto, UpdateEducationDto},
            faq::{CreateFaqDto, UpdateFaqDto},
            form::{AppointmentFormDto, ContactFormDto},
            innovation::{CreateInnovationDto, UpdateInnovationDto},
            media::{CreateMediaItemDto, UpdateMediaItemDto},
            news::{CreateNewsDto, UpdateNewsDto},
            project::{CreateProjectDto, UpdateProjectDto},
            research::{CreateResearchDto, UpdateResearchDto},
            sponsor::{CreateSponsorDto, UpdateSponsorDto},
            team::{CreateTeamMemberDto, UpdateTeamMemberDto},
            treatment::{CreateTreatmentDto, UpdateTreatmentDto},
            upload::{FileListDto, MultiUploadDto, StoredFileDto, UploadDto, UploadedFileDto},
        },
        service::upload::{MAX_FILES_PER_REQUEST, MAX_FILE_SIZE},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spine Clinic API",
        description = "Content management backend for the clinic website"
    ),
    paths(
        auth::login,
        auth::logout,
        auth::check_session,
        team::list_team,
        team::get_team_member,
        team::create_team_member,
        team::update_team_member,
        team::delete_team_member,
        treatment::list_treatments,
        treatment::get_treatment_by_slug,
        treatment::create_treatment,
        treatment::update_treatment,
        treatment::delete_treatment,
        project::list_projects,
        project::get_project,
        project::create_project,
        project::update_project,
        project::delete_project,
        sponsor::list_sponsors,
        sponsor::get_sponsor,
        sponsor::create_sponsor,
        sponsor::update_sponsor,
        sponsor::delete_sponsor,
        research::list_research,
        research::get_research,
        research::create_research,
        research::update_research,
        research::delete_research,
        media::list_media,
        media::get_media_item,
        media::create_media_item,
        media::update_media_item,
        media::delete_media_item,
        innovation::list_innovations,
        innovation::get_innovation,
        innovation::create_innovation,
        innovation::update_innovation,
        innovation::delete_innovation,
        news::list_news,
        news::get_news_item,
        news::create_news_item,
        news::update_news_item,
        news::delete_news_item,
        faq::list_faq,
        faq::get_faq_entry,
        faq::create_faq_entry,
        faq::update_faq_entry,
        faq::delete_faq_entry,
        education::list_education,
        education::get_education_item,
        education::create_education_item,
        education::update_education_item,
        education::delete_education_item,
        contact::submit_contact,
        contact::submit_appointment,
        upload::upload_file,
        upload::upload_files,
        upload::list_files,
        upload::delete_file,
        sitemap::sitemap,
        sitemap::robots,
        health::health,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        LoginDto,
        LoginResponseDto,
        SessionDto,
        AdminDto,
        ContactFormDto,
        AppointmentFormDto,
        UploadDto,
        MultiUploadDto,
        FileListDto,
        UploadedFileDto,
        StoredFileDto,
        entity::team_member::Model,
        entity::treatment::Model,
        entity::project::Model,
        entity::sponsor::Model,
        entity::research::Model,
        entity::media_item::Model,
        entity::innovation::Model,
        entity::news::Model,
        entity::faq::Model,
        entity::education::Model,
        CreateTeamMemberDto,
        UpdateTeamMemberDto,
        CreateTreatmentDto,
        UpdateTreatmentDto,
        CreateProjectDto,
        UpdateProjectDto,
        CreateSponsorDto,
        UpdateSponsorDto,
        CreateResearchDto,
        UpdateResearchDto,
        CreateMediaItemDto,
        UpdateMediaItemDto,
        CreateInnovationDto,
        UpdateInnovationDto,
        CreateNewsDto,
        UpdateNewsDto,
        CreateFaqDto,
        UpdateFaqDto,
        CreateEducationDto,
        UpdateEducationDto,
    )),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "team", description = "Doctors and team members"),
        (name = "treatments", description = "Treatment pages"),
        (name = "projects", description = "Projects"),
        (name = "sponsors", description = "Sponsors"),
        (name = "research", description = "Research entries"),
        (name = "media", description = "Media library"),
        (name = "innovations", description = "Innovations"),
        (name = "news", description = "News"),
        (name = "faq", description = "Frequently asked questions"),
        (name = "education", description = "Education items"),
        (name = "contact", description = "Contact form"),
        (name = "appointment", description = "Appointment form"),
        (name = "upload", description = "File uploads"),
        (name = "seo", description = "Search engine documents"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(config.form_rate_limit_per_second)
        .burst_size(config.form_rate_limit_burst)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limiter configuration".to_string()))?;

    let forms = Router::new()
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/appointment", post(contact::submit_appointment))
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    let uploads = Router::new()
        .route("/api/upload", post(upload::upload_file))
        .route("/api/upload/multiple", post(upload::upload_files))
        .route("/api/upload/list", get(upload::list_files))
        .route("/api/upload/{filename}", delete(upload::delete_file))
        .layer(DefaultBodyLimit::max(
            MAX_FILE_SIZE * MAX_FILES_PER_REQUEST + 1024 * 1024,
        ));

    Ok(Router::new()
        .route("/api/admin/login", post(auth::login))
        .route("/api/admin/logout", post(auth::logout))
        .route("/api/admin/session", get(auth::check_session))
        .merge(content_routes())
        .merge(forms)
        .merge(uploads)
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/robots.txt", get(sitemap::robots))
        .route("/health", get(health::health))
        .route("/", get(health::root_redirect))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())))
}

fn content_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/team",
            get(team::list_team).post(team::create_team_member),
        )
        .route(
            "/api/team/{id}",
            get(team::get_team_member)
                .put(team::update_team_member)
                .delete(team::delete_team_member),
        )
        .route(
            "/api/treatments",
            get(treatment::list_treatments).post(treatment::create_treatment),
        )
        // Treatments are fetched by slug; updates and deletes parse the same
        // segment as an id.
        .route(
            "/api/treatments/{slug}",
            get(treatment::get_treatment_by_slug)
                .put(treatment::update_treatment)
                .delete(treatment::delete_treatment),
        )
        .route(
            "/api/projects",
            get(project::list_projects).post(project::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/api/sponsors",
            get(sponsor::list_sponsors).post(sponsor::create_sponsor),
        )
        .route(
            "/api/sponsors/{id}",
            get(sponsor::get_sponsor)
                .put(sponsor::update_sponsor)
                .delete(sponsor::delete_sponsor),
        )
        .route(
            "/api/researches",
            get(research::list_research).post(research::create_research),
        )
        .route(
            "/api/researches/{id}",
            get(research::get_research)
                .put(research::update_research)
                .delete(research::delete_research),
        )
        .route(
            "/api/media",
            get(media::list_media).post(media::create_media_item),
        )
        .route(
            "/api/media/{id}",
            get(media::get_media_item)
                .put(media::update_media_item)
                .delete(media::delete_media_item),
        )
        .route(
            "/api/innovations",
            get(innovation::list_innovations).post(innovation::create_innovation),
        )
        .route(
            "/api/innovations/{id}",
            get(innovation::get_innovation)
                .put(innovation::update_innovation)
                .delete(innovation::delete_innovation),
        )
        .route("/api/news", get(news::list_news).post(news::create_news_item))
        .route(
            "/api/news/{id}",
            get(news::get_news_item)
                .put(news::update_news_item)
                .delete(news::delete_news_item),
        )
        .route("/api/faq", get(faq::list_faq).post(faq::create_faq_entry))
        .route(
            "/api/faq/{id}",
            get(faq::get_faq_entry)
                .put(faq::update_faq_entry)
                .delete(faq::delete_faq_entry),
        )
        .route(
            "/api/education",
            get(education::list_education).post(education::create_education_item),
        )
        .route(
            "/api/education/{id}",
            get(education::get_education_item)
                .put(education::update_education_item)
                .delete(education::delete_education_item),
        )
}
