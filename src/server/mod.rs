//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations, with a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access
//!   control, and OpenAPI path documentation
//! - **Service Layer** (`service/`) - Business logic between controllers and
//!   the data layer (generic content service, mailer, uploads, sitemap)
//! - **Data Layer** (`data/`) - Database repositories over SeaORM entities
//! - **Model Layer** (`model/`) - Request payloads with validation rules
//! - **Error Layer** (`error/`) - Application error types and HTTP mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guard
//!
//! Supporting modules provide application infrastructure: `config`
//! (environment-based configuration), `state` (shared application state),
//! `startup` (database, session store, and admin seeding), and `router`
//! (route configuration plus the OpenAPI document).

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
