use actix_web::{HttpResponse, post, web};

use crate::models::dto::RetrainResponse;
use crate::services::python::{CollaboratorError, PythonRunner};

// Entraînement synchrone : la réponse attend la fin du processus (plafonné
// par le timeout du runner). Les flux du script ne sortent que dans les logs.
#[post("/retrain")]
pub async fn retrain(runner: web::Data<PythonRunner>) -> HttpResponse {
    match runner.retrain().await {
        Ok(capture) => {
            tracing::info!(stdout = %capture.stdout, "model retraining completed");
            HttpResponse::Ok().json(RetrainResponse {
                message: "Model retraining completed successfully!".to_string(),
                error: None,
            })
        }
        Err(CollaboratorError::ScriptNotFound(path)) => {
            tracing::error!(path = %path.display(), "training script not found");
            HttpResponse::NotFound().json(RetrainResponse {
                message: "Training script not found on the server.".to_string(),
                error: None,
            })
        }
        Err(CollaboratorError::Failed {
            status,
            stdout,
            stderr,
        }) => {
            tracing::error!(status, %stdout, %stderr, "model retraining failed");
            HttpResponse::InternalServerError().json(RetrainResponse {
                message: "Model retraining failed. Check server logs for details.".to_string(),
                error: Some(stderr),
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "model retraining failed");
            HttpResponse::InternalServerError().json(RetrainResponse {
                message: "Model retraining failed. Check server logs for details.".to_string(),
                error: Some(e.to_string()),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/model").service(retrain));
}
