use crate::{
    error::AppError,
    models::User,
};
use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// Aggregate counts for the admin dashboard.
///
/// The surrounding scope is wrapped in `JwtGuard`, so requests arriving here
/// always carry verified claims.
#[get("/stats")]
pub async fn stats(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&**pool)
        .await?;
    let job_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "users": user_count,
        "jobs": job_count,
    })))
}

/// Lists all registered accounts, newest first.
#[get("/users")]
pub async fn list_users(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, email, role, created_at FROM users ORDER BY created_at DESC",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(users))
}
