use actix_web::{HttpResponse, get, web};
use sea_orm::DatabaseConnection;

use crate::error::ApiError;
use crate::services::attendance::AttendanceData;

// Liste des séances pour le menu déroulant du frontend : une ligne par titre
// distinct, classes avec inscrits uniquement.
#[get("")]
pub async fn list_meetings(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let data = AttendanceData::load(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(data.meeting_list()))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/meetings").service(list_meetings));
}
