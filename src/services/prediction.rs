use chrono::Datelike;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::Value;

use super::attendance::{AttendanceData, ScheduleSlot};
use super::python::{CollaboratorError, PythonRunner};
use crate::error::ApiError;
use crate::models::dto::FeatureRecord;
use crate::models::{classe, cours, meeting};

// Prior neutre pour un étudiant sans historique : ni présent ni absent.
// À préserver tel quel, le modèle a été entraîné avec.
const NO_HISTORY_PRIOR: f64 = 0.5;

// Contexte de classe commun à tous les vecteurs de features d'une séance.
#[derive(Debug, Clone, Copy)]
pub struct ClassContext {
    pub class_id: i32,
    pub course_id: i32,
    pub id_matiere: Option<i32>,
    pub id_professeur: Option<i32>,
}

pub struct PredictionService;

impl PredictionService {
    /// Assemble un vecteur de features par étudiant inscrit à la classe de la
    /// séance, le passe au scoreur via stdin et retourne sa sortie décodée
    /// telle quelle. Toute défaillance du collaborateur est loggée en détail
    /// côté serveur et remonte comme un unique 500 opaque.
    pub async fn predict_for_meeting(
        db: &DatabaseConnection,
        runner: &PythonRunner,
        meeting_id: i32,
    ) -> Result<Value, ApiError> {
        // 1. La séance et sa classe
        let Some(meeting) = meeting::Entity::find_by_id(meeting_id).one(db).await? else {
            return Err(ApiError::NotFound("Meeting not found.".to_string()));
        };
        let Some(classe) = classe::Entity::find_by_id(meeting.id_classe).one(db).await? else {
            // classe absente = personne d'inscrit, pas une erreur
            return Ok(Value::Array(vec![]));
        };
        let cours = cours::Entity::find_by_id(classe.id_cours).one(db).await?;

        let ctx = ClassContext {
            class_id: classe.id,
            course_id: classe.id_cours,
            id_matiere: cours.and_then(|c| c.id_matiere),
            id_professeur: classe.id_professeur,
        };

        // 2. Historique + créneau via l'agrégateur canonique
        let data = AttendanceData::load(db).await?;
        let features = build_feature_set(&data, ctx);
        if features.is_empty() {
            return Ok(Value::Array(vec![]));
        }

        // 3. Un processus par appel, sortie décodée retournée verbatim
        let payload = serde_json::to_string(&features).map_err(|e| {
            tracing::error!(error = %e, "failed to serialize feature set");
            ApiError::Collaborator
        })?;

        let decoded = runner.score(payload).await.map_err(log_collaborator)?;

        if decoded.get("error").and_then(Value::as_bool).unwrap_or(false) {
            tracing::error!(
                message = ?decoded.get("message"),
                "scorer returned an explicit error flag"
            );
            return Err(ApiError::Collaborator);
        }

        Ok(decoded)
    }
}

/// Un FeatureRecord par étudiant de l'effectif, dans l'ordre des ids.
pub fn build_feature_set(data: &AttendanceData, ctx: ClassContext) -> Vec<FeatureRecord> {
    let (meeting_weekday, meeting_hour) = schedule_features(data.schedule_for_class(ctx.class_id));

    data.class_roster(ctx.class_id)
        .into_iter()
        .map(|user_id| {
            let stats = data.user_stats(user_id);
            let user_attendance_rate = if stats.enrolled_meetings > 0 {
                stats.rate
            } else {
                NO_HISTORY_PRIOR
            };

            FeatureRecord {
                user_id,
                class_id: ctx.class_id,
                course_id: ctx.course_id,
                id_matiere: ctx.id_matiere,
                id_professeur: ctx.id_professeur,
                meeting_weekday,
                meeting_hour,
                user_attendance_rate,
                user_total_meetings: stats.enrolled_meetings,
            }
        })
        .collect()
}

/// (jour de semaine 0-6 avec dimanche = 0, heure 0-23) du créneau le plus
/// récent ; (0, 0) sans planning ou si l'heure est inexploitable.
pub fn schedule_features(slot: Option<&ScheduleSlot>) -> (u32, u32) {
    let Some(slot) = slot else {
        return (0, 0);
    };

    let weekday = slot.day.weekday().num_days_from_sunday();
    let hour = slot
        .heure_from
        .as_deref()
        .and_then(|h| h.split(':').next())
        .and_then(|h| h.trim().parse::<u32>().ok())
        .filter(|h| *h < 24)
        .unwrap_or(0);

    (weekday, hour)
}

fn log_collaborator(e: CollaboratorError) -> ApiError {
    match &e {
        CollaboratorError::Failed {
            status,
            stdout,
            stderr,
        } => {
            tracing::error!(status, %stdout, %stderr, "scoring process failed");
        }
        other => {
            tracing::error!(error = %other, "scoring process failed");
        }
    }
    ApiError::Collaborator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::attendance::MeetingRow;
    use chrono::NaiveDate;

    fn m(id: i32, class_id: i32) -> MeetingRow {
        MeetingRow {
            id,
            titre_fr: Some(format!("m{}", id)),
            class_id,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ctx() -> ClassContext {
        ClassContext {
            class_id: 10,
            course_id: 4,
            id_matiere: Some(7),
            id_professeur: Some(9),
        }
    }

    #[test]
    fn history_of_two_meetings_one_attended_scores_half() {
        let data = AttendanceData::new(
            vec![(1, 100)],
            vec![(100, "10".to_string())],
            vec![m(1, 10), m(2, 10)],
            vec![(1, 1)],
            vec![],
        );
        let features = build_feature_set(&data, ctx());
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].user_attendance_rate, 0.5);
        assert_eq!(features[0].user_total_meetings, 2);
    }

    #[test]
    fn zero_history_gets_neutral_prior_not_zero() {
        // même valeur 0.5 que ci-dessus, mais par le chemin "aucun historique"
        let data = AttendanceData::new(
            vec![(2, 100)],
            vec![(100, "10".to_string())],
            vec![],
            vec![],
            vec![],
        );
        let features = build_feature_set(&data, ctx());
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].user_attendance_rate, 0.5);
        assert_eq!(features[0].user_total_meetings, 0);
    }

    #[test]
    fn schedule_features_derive_weekday_and_hour() {
        // 2024-03-03 est un dimanche
        let slot = ScheduleSlot {
            day: day("2024-03-03"),
            heure_from: Some("14:30:00".to_string()),
        };
        assert_eq!(schedule_features(Some(&slot)), (0, 14));

        let monday = ScheduleSlot {
            day: day("2024-03-04"),
            heure_from: Some("08:00:00".to_string()),
        };
        assert_eq!(schedule_features(Some(&monday)), (1, 8));
    }

    #[test]
    fn missing_or_garbage_schedule_defaults_to_zero() {
        assert_eq!(schedule_features(None), (0, 0));

        let no_hour = ScheduleSlot {
            day: day("2024-03-04"),
            heure_from: None,
        };
        assert_eq!(schedule_features(Some(&no_hour)).1, 0);

        let garbage = ScheduleSlot {
            day: day("2024-03-04"),
            heure_from: Some("99:00:00".to_string()),
        };
        assert_eq!(schedule_features(Some(&garbage)).1, 0);
    }

    #[test]
    fn feature_names_match_the_collaborator_contract() {
        let record = FeatureRecord {
            user_id: 1,
            class_id: 10,
            course_id: 4,
            id_matiere: Some(7),
            id_professeur: Some(9),
            meeting_weekday: 1,
            meeting_hour: 8,
            user_attendance_rate: 0.5,
            user_total_meetings: 2,
        };
        let json = serde_json::to_value(&record).unwrap();
        for key in [
            "user_id",
            "class_id",
            "course_id",
            "id_matiere",
            "id_professeur",
            "meeting_weekday",
            "meeting_hour",
            "user_attendance_rate",
            "user_total_meetings",
        ] {
            assert!(json.get(key).is_some(), "missing feature key {}", key);
        }
    }

    #[test]
    fn missing_course_metadata_is_forwarded_as_null() {
        let data = AttendanceData::new(
            vec![(1, 100)],
            vec![(100, "10".to_string())],
            vec![],
            vec![],
            vec![],
        );
        let ctx = ClassContext {
            class_id: 10,
            course_id: 4,
            id_matiere: None,
            id_professeur: None,
        };
        let features = build_feature_set(&data, ctx);
        let json = serde_json::to_value(&features[0]).unwrap();
        assert!(json.get("id_matiere").unwrap().is_null());
        assert!(json.get("id_professeur").unwrap().is_null());
    }

    #[test]
    fn roster_order_is_deterministic() {
        let data = AttendanceData::new(
            vec![(3, 100), (1, 100), (2, 100)],
            vec![(100, "10".to_string())],
            vec![],
            vec![],
            vec![],
        );
        let ids: Vec<i32> = build_feature_set(&data, ctx())
            .iter()
            .map(|f| f.user_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
