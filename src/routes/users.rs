use actix_web::{HttpResponse, get, web};
use sea_orm::DatabaseConnection;

use crate::error::ApiError;
use crate::models::dto::UserListItem;
use crate::services::attendance::AttendanceData;

#[get("")]
pub async fn list_users(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let data = AttendanceData::load(db.get_ref()).await?;
    let users: Vec<UserListItem> = data
        .distinct_users()
        .into_iter()
        .map(|id| UserListItem { id })
        .collect();
    Ok(HttpResponse::Ok().json(users))
}

// Utilisateur inconnu = compteurs à zéro, jamais un 404 : pas de dossier,
// pas d'erreur.
#[get("/{user_id:\\d+}/stats")]
pub async fn user_stats(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let data = AttendanceData::load(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(data.user_stats_response(user_id)))
}

#[get("/{user_id:\\d+}/meeting-performance")]
pub async fn meeting_performance(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let data = AttendanceData::load(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(data.meeting_performance(user_id)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(list_users)
            .service(user_stats)
            .service(meeting_performance),
    );
}
