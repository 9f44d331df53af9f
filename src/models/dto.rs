//pour les réponses structurées
use serde::{Deserialize, Serialize};
use validator::Validate;

// 1 ligne de GET /api/meetings (dédupliquée par titre)
#[derive(Debug, Serialize)]
pub struct MeetingListItem {
    pub id: i32,
    pub titre_fr: String,
    pub class_id: i32,
}

// 1 ligne de GET /api/users
#[derive(Debug, Serialize)]
pub struct UserListItem {
    pub id: i32,
}

// GET /api/users/{id}/stats
#[derive(Debug, Serialize, PartialEq)]
pub struct UserStatsResponse {
    pub total_enrolled_meetings: u32,
    pub attended_meetings: u32,
    pub personal_presence_rate: f64,
}

// 1 ligne de GET /api/users/{id}/meeting-performance
#[derive(Debug, Serialize, PartialEq)]
pub struct MeetingPerformanceRow {
    pub meeting_title: String,
    pub scheduled_day: String,
    pub scheduled_time: String,
    pub attendees_string: String,
    pub class_attendance_rate: f64,
}

// 1 ligne de GET /api/analytics/students/at-risk
#[derive(Debug, Serialize, PartialEq)]
pub struct AtRiskStudent {
    pub user_id: i32,
    pub enrolled_meetings: u32,
    pub attended_meetings: u32,
    pub overall_rate: f64,
}

// Paramètres de GET /api/analytics/students/at-risk.
// Absent = valeur par défaut ; présent mais invalide = 400, jamais de
// substitution silencieuse.
#[derive(Debug, Deserialize, Validate)]
pub struct AtRiskQuery {
    #[validate(range(min = 0.0, max = 1.0, message = "threshold must be within [0, 1]"))]
    pub threshold: Option<f64>,
    #[serde(rename = "minMeetings")]
    #[validate(range(min = 0, message = "minMeetings must be >= 0"))]
    pub min_meetings: Option<i64>,
}

pub const DEFAULT_AT_RISK_THRESHOLD: f64 = 0.60;
pub const DEFAULT_AT_RISK_MIN_MEETINGS: u32 = 5;

// GET /api/stats/overview
#[derive(Debug, Serialize, PartialEq)]
pub struct SystemOverview {
    pub total_students: u32,
    pub total_classes: u32,
    pub total_meetings_held: u32,
    pub overall_attendance_rate: f64,
}

// 1 vecteur de features par étudiant inscrit, envoyé tel quel au scoreur.
// Les noms de champs font partie du contrat du collaborateur : ne pas
// renommer. Matière et professeur peuvent manquer en base et partent alors
// en null, pas en 0 — c'est au modèle de décider quoi en faire.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureRecord {
    pub user_id: i32,
    pub class_id: i32,
    pub course_id: i32,
    pub id_matiere: Option<i32>,
    pub id_professeur: Option<i32>,
    pub meeting_weekday: u32,
    pub meeting_hour: u32,
    pub user_attendance_rate: f64,
    pub user_total_meetings: u32,
}

// POST /api/model/retrain
#[derive(Debug, Serialize)]
pub struct RetrainResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
