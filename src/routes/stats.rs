use actix_web::{HttpResponse, get, web};
use sea_orm::DatabaseConnection;

use crate::error::ApiError;
use crate::services::attendance::AttendanceData;

#[get("/overview")]
pub async fn system_overview(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let data = AttendanceData::load(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(data.system_overview()))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/stats").service(system_overview));
}
