use actix_web::{HttpResponse, get, web};
use sea_orm::DatabaseConnection;

use crate::error::ApiError;
use crate::services::prediction::PredictionService;
use crate::services::python::PythonRunner;

// Réponse = sortie du scoreur, verbatim : son schéma appartient au modèle.
#[get("/meeting/{meeting_id:\\d+}")]
pub async fn predict_for_meeting(
    db: web::Data<DatabaseConnection>,
    runner: web::Data<PythonRunner>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let meeting_id = path.into_inner();
    let predictions =
        PredictionService::predict_for_meeting(db.get_ref(), runner.get_ref(), meeting_id).await?;
    Ok(HttpResponse::Ok().json(predictions))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/predict").service(predict_for_meeting));
}
