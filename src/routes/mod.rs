pub mod admin;
pub mod auth;
pub mod jobs;

use actix_web::web;

use crate::auth::JwtGuard;

/// Registers the main API route group. Mounted by the assembler under the
/// `/api` prefix; the services it needs (pool, token manager) are injected
/// as app data, never reached for as globals.
pub fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register),
    )
    .service(
        web::scope("/jobs")
            .service(jobs::list_jobs)
            .service(jobs::get_job)
            .service(jobs::create_job),
    );
}

/// Registers the administrative route group. This group owns its prefix and
/// is guarded as a whole: every admin route requires a valid token.
pub fn admin(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(JwtGuard)
            .service(admin::stats)
            .service(admin::list_users),
    );
}
