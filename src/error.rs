use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

// Taxonomie des erreurs qui atteignent la couche HTTP. Les agrégations ne
// remontent jamais d'erreur métier (utilisateur inconnu = compteurs à zéro) ;
// seules les erreurs de validation, de BD et du collaborateur sortent ici.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    // Le détail (stdout/stderr du processus) est déjà loggé côté serveur ;
    // le client ne reçoit qu'un message opaque.
    #[error("The prediction engine encountered a critical error. Please check system logs.")]
    Collaborator,

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Collaborator => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(e) = self {
            tracing::error!(error = %e, "database query failed");
        }
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound("Meeting not found.".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Meeting not found.");
    }

    #[test]
    fn collaborator_message_is_opaque() {
        let err = ApiError::Collaborator;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("stderr"));
    }
}
