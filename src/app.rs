//!
//! # Application Assembly
//!
//! Builds a ready-to-serve application from environment-derived
//! configuration. Assembly runs once, synchronously, at process startup:
//! resolve config, provision the upload directory, create the shared
//! services, then hand a composition function to the HTTP server.
//!
//! Shared services live in [`AppState`] and are injected into route groups
//! as app data. Route registration receives them explicitly, so there is no
//! ordering dependency between service creation and route-module loading,
//! and assembling twice simply yields two independent states.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::TokenManager;
use crate::config::{Config, API_PREFIX, FRONTEND_ORIGIN, UPLOAD_DIR};
use crate::error::AppError;
use crate::routes;

/// Fixed liveness message served at the root path.
pub const ROOT_MESSAGE: &str = "JobHive Flask API is running! Access API routes at /api/...";

/// Shared services for the lifetime of the process, created once during
/// assembly and cloned into each worker's app instance.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenManager,
    pub upload_dir: PathBuf,
}

/// Builds the application state from configuration.
///
/// The connection pool is created lazily: a well-formed but unreachable
/// `DATABASE_URL` is not an assembly error and only fails when the first
/// query runs. Upload-directory provisioning failure is fatal here.
pub fn assemble(config: &Config) -> Result<AppState, AppError> {
    let upload_dir = env::current_dir()?.join(UPLOAD_DIR);
    provision_upload_dir(&upload_dir)?;

    let pool = PgPoolOptions::new().connect_lazy(&config.database_url)?;
    let tokens = TokenManager::new(&config.jwt_secret_key);

    Ok(AppState {
        pool,
        tokens,
        upload_dir,
    })
}

/// Creates the upload directory if it is missing; succeeds silently when it
/// already exists.
pub fn provision_upload_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Cross-origin policy for the API group: exactly the frontend origin,
/// credentials allowed. Applied to the `/api` scope only; other paths are
/// untouched by it.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allowed_origin(FRONTEND_ORIGIN)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

/// Liveness/info endpoint. No side effects, no error path.
#[get("/")]
pub async fn app_root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": ROOT_MESSAGE }))
}

/// Returns the composition function for one app instance.
///
/// Mounts, in order: shared services as app data, the root liveness
/// endpoint, the static pass-through for uploaded files, the CORS-wrapped
/// API group, and the admin group under its own prefix.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state.pool.clone()))
            .app_data(web::Data::new(state.tokens.clone()))
            .service(app_root)
            .service(Files::new("/uploads", &state.upload_dir))
            .service(
                web::scope(API_PREFIX)
                    .wrap(cors_policy())
                    .configure(routes::api),
            )
            .configure(routes::admin);
    }
}
