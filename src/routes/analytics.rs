use actix_web::{HttpResponse, get, web};
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::error::ApiError;
use crate::models::dto::{AtRiskQuery, DEFAULT_AT_RISK_MIN_MEETINGS, DEFAULT_AT_RISK_THRESHOLD};
use crate::services::attendance::AttendanceData;

// Paramètre absent = défaut ; présent mais invalide (NaN, hors [0,1],
// négatif) = 400, jamais de substitution silencieuse.
#[get("/students/at-risk")]
pub async fn at_risk_students(
    db: web::Data<DatabaseConnection>,
    query: web::Query<AtRiskQuery>,
) -> Result<HttpResponse, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let threshold = query.threshold.unwrap_or(DEFAULT_AT_RISK_THRESHOLD);
    let min_meetings = query
        .min_meetings
        .map(|m| u32::try_from(m).unwrap_or(u32::MAX))
        .unwrap_or(DEFAULT_AT_RISK_MIN_MEETINGS);

    let data = AttendanceData::load(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(data.at_risk(threshold, min_meetings)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/analytics").service(at_risk_students));
}
