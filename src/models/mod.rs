// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table MySQL avec SeaORM.
//
// Liste des modules:
//   - parcour_group_pivot : pivot utilisateur <-> parcours (inscriptions)
//   - parcours_classes : parcours avec sa liste de classes (chaîne délimitée)
//   - classe : classes (cours + professeur)
//   - cours : cours (matière)
//   - meeting : séances planifiées d'une classe
//   - participation_meeting : preuve de présence d'un utilisateur à une séance
//   - planning_cours_journalier : créneaux calendaires d'une classe (jour + heure)
//   - dto : Data Transfer Objects pour les réponses API
//
// Points d'attention:
//   - Toutes les tables appartiennent au système d'inscription externe :
//     lecture seule, aucune écriture nulle part dans ce service.
//   - parcours_classes.classes est une liste d'ids séparés par des virgules,
//     pas une table de jointure. Le parsing en set se fait dans
//     services/attendance.rs, jamais par sous-chaîne SQL.
//
// ============================================================================

pub mod classe;
pub mod cours;
pub mod dto;
pub mod meeting;
pub mod parcour_group_pivot;
pub mod parcours_classes;
pub mod participation_meeting;
pub mod planning_cours_journalier;
