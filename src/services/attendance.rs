use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::dto::{
    AtRiskStudent, MeetingListItem, MeetingPerformanceRow, SystemOverview, UserStatsResponse,
};
use crate::models::{
    meeting, parcour_group_pivot, parcours_classes, participation_meeting,
    planning_cours_journalier,
};
use chrono::NaiveDate;

/// Parse la liste de classes d'un parcours ("5,12,7") en set d'ids discrets.
/// Les éléments vides ou non numériques sont ignorés. Jamais de test par
/// sous-chaîne : "1" n'est pas membre de "10,12".
pub fn parse_class_list(raw: &str) -> BTreeSet<i32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i32>().ok())
        .collect()
}

/// "HH:MM:SS" -> "HH:MM" pour l'affichage.
fn format_heure(heure: &str) -> String {
    heure.chars().take(5).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRow {
    pub id: i32,
    pub titre_fr: Option<String>,
    pub class_id: i32,
}

// Dernier créneau planifié d'une classe (jour le plus récent du planning).
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSlot {
    pub day: NaiveDate,
    pub heure_from: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserStats {
    pub user_id: i32,
    pub enrolled_meetings: u32,
    pub attended_meetings: u32,
    pub rate: f64,
}

/// Instantané en lecture seule des cinq tables d'inscription/présence.
/// Chargé une fois par requête, puis toutes les agrégations se font en Rust
/// sur des sets. Unique implémentation du calcul de présence : tous les
/// endpoints passent par ici.
#[derive(Debug, Default)]
pub struct AttendanceData {
    // (user_id, id_parcour_classes), une ligne par inscription au pivot
    enrollments: Vec<(i32, i32)>,
    // id parcours_classes -> set d'ids de classes parsé
    class_sets: HashMap<i32, BTreeSet<i32>>,
    meetings: Vec<MeetingRow>,
    // présences distinctes : meeting -> users, et user -> meetings
    attendees_by_meeting: HashMap<i32, BTreeSet<i32>>,
    attended_by_user: HashMap<i32, BTreeSet<i32>>,
    // class_id -> créneau le plus récent
    schedule: HashMap<i32, ScheduleSlot>,
}

impl AttendanceData {
    /// Charge les cinq tables en un instantané.
    pub async fn load(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let pivots = parcour_group_pivot::Entity::find().all(db).await?;
        let parcours = parcours_classes::Entity::find().all(db).await?;
        let meetings = meeting::Entity::find().all(db).await?;
        let participations = participation_meeting::Entity::find().all(db).await?;
        let plannings = planning_cours_journalier::Entity::find().all(db).await?;

        Ok(Self::new(
            pivots
                .into_iter()
                .map(|p| (p.user_id, p.id_parcour_classes))
                .collect(),
            parcours
                .into_iter()
                .map(|pc| (pc.id, pc.classes.unwrap_or_default()))
                .collect(),
            meetings
                .into_iter()
                .map(|m| MeetingRow {
                    id: m.id,
                    titre_fr: m.titre_fr,
                    class_id: m.id_classe,
                })
                .collect(),
            participations
                .into_iter()
                .map(|pm| (pm.id_meeting, pm.id_user))
                .collect(),
            plannings
                .into_iter()
                .filter_map(|pcj| pcj.day.map(|day| (pcj.id_classe, day, pcj.heure_from)))
                .collect(),
        ))
    }

    /// Construit l'instantané à partir de lignes brutes. Les doublons de
    /// participation sont dédupliqués ici, une fois pour toutes.
    pub fn new(
        enrollments: Vec<(i32, i32)>,
        parcours: Vec<(i32, String)>,
        meetings: Vec<MeetingRow>,
        participations: Vec<(i32, i32)>,
        plannings: Vec<(i32, NaiveDate, Option<String>)>,
    ) -> Self {
        let class_sets = parcours
            .into_iter()
            .map(|(id, raw)| (id, parse_class_list(&raw)))
            .collect();

        let mut attendees_by_meeting: HashMap<i32, BTreeSet<i32>> = HashMap::new();
        let mut attended_by_user: HashMap<i32, BTreeSet<i32>> = HashMap::new();
        for (meeting_id, user_id) in participations {
            attendees_by_meeting
                .entry(meeting_id)
                .or_default()
                .insert(user_id);
            attended_by_user
                .entry(user_id)
                .or_default()
                .insert(meeting_id);
        }

        // Créneau le plus récent par classe (jour max, puis heure max en cas
        // d'égalité de jour).
        let mut schedule: HashMap<i32, ScheduleSlot> = HashMap::new();
        for (class_id, day, heure_from) in plannings {
            let candidate = ScheduleSlot { day, heure_from };
            match schedule.get(&class_id) {
                Some(current)
                    if (current.day, &current.heure_from) >= (candidate.day, &candidate.heure_from) => {}
                _ => {
                    schedule.insert(class_id, candidate);
                }
            }
        }

        Self {
            enrollments,
            class_sets,
            meetings,
            attendees_by_meeting,
            attended_by_user,
            schedule,
        }
    }

    /// Union des sets de classes de tous les parcours de l'utilisateur.
    pub fn enrolled_class_ids(&self, user_id: i32) -> BTreeSet<i32> {
        let mut classes = BTreeSet::new();
        for (uid, parcours_id) in &self.enrollments {
            if *uid == user_id {
                if let Some(set) = self.class_sets.get(parcours_id) {
                    classes.extend(set.iter().copied());
                }
            }
        }
        classes
    }

    /// Séances dont la classe appartient aux inscriptions de l'utilisateur.
    pub fn enrolled_meeting_ids(&self, user_id: i32) -> BTreeSet<i32> {
        let classes = self.enrolled_class_ids(user_id);
        self.meetings
            .iter()
            .filter(|m| classes.contains(&m.class_id))
            .map(|m| m.id)
            .collect()
    }

    /// Statistiques canoniques d'un utilisateur. Utilisateur inconnu =
    /// compteurs à zéro, jamais une erreur. Le compte de présences est borné
    /// par le compte d'inscriptions (garde de cohérence des données,
    /// appliquée uniformément partout où un taux est dérivé).
    pub fn user_stats(&self, user_id: i32) -> UserStats {
        let enrolled = self.enrolled_meeting_ids(user_id);
        let attended_all = self.attended_by_user.get(&user_id);

        let attended_in_scope = attended_all
            .map(|set| set.intersection(&enrolled).count())
            .unwrap_or(0);

        let raw_attended = attended_all.map(BTreeSet::len).unwrap_or(0);
        if raw_attended > enrolled.len() {
            tracing::warn!(
                user_id,
                raw_attended,
                enrolled = enrolled.len(),
                "participation records exceed enrolled meetings; counting enrolled meetings only"
            );
        }

        let enrolled_count = enrolled.len() as u32;
        let attended_count = (attended_in_scope as u32).min(enrolled_count);
        let rate = if enrolled_count > 0 {
            f64::from(attended_count) / f64::from(enrolled_count)
        } else {
            0.0
        };

        UserStats {
            user_id,
            enrolled_meetings: enrolled_count,
            attended_meetings: attended_count,
            rate,
        }
    }

    pub fn user_stats_response(&self, user_id: i32) -> UserStatsResponse {
        let stats = self.user_stats(user_id);
        UserStatsResponse {
            total_enrolled_meetings: stats.enrolled_meetings,
            attended_meetings: stats.attended_meetings,
            personal_presence_rate: stats.rate,
        }
    }

    /// Effectif d'une classe : utilisateurs distincts dont un parcours
    /// contient cette classe.
    pub fn class_roster(&self, class_id: i32) -> BTreeSet<i32> {
        let mut roster = BTreeSet::new();
        for (user_id, parcours_id) in &self.enrollments {
            if let Some(set) = self.class_sets.get(parcours_id) {
                if set.contains(&class_id) {
                    roster.insert(*user_id);
                }
            }
        }
        roster
    }

    /// Taux de présence d'une séance : présents distincts intersectés avec
    /// l'effectif de la classe (les présences hors effectif ne comptent pas),
    /// puis borné par l'effectif.
    pub fn meeting_rate(&self, meeting_id: i32, class_id: i32) -> (u32, u32, f64) {
        let roster = self.class_roster(class_id);
        let attendees = self.attendees_by_meeting.get(&meeting_id);

        let attended_in_roster = attendees
            .map(|set| set.intersection(&roster).count())
            .unwrap_or(0);

        let raw_attendees = attendees.map(BTreeSet::len).unwrap_or(0);
        if raw_attendees > roster.len() {
            tracing::warn!(
                meeting_id,
                class_id,
                raw_attendees,
                roster = roster.len(),
                "attendees outside the class roster; counting roster members only"
            );
        }

        let total_enrolled = roster.len() as u32;
        let total_attended = (attended_in_roster as u32).min(total_enrolled);
        let rate = if total_enrolled > 0 {
            f64::from(total_attended) / f64::from(total_enrolled)
        } else {
            0.0
        };
        (total_attended, total_enrolled, rate)
    }

    pub fn schedule_for_class(&self, class_id: i32) -> Option<&ScheduleSlot> {
        self.schedule.get(&class_id)
    }

    /// Détail par séance pour un utilisateur, trié par jour planifié
    /// décroissant (séances sans planning en dernier) puis id décroissant.
    pub fn meeting_performance(&self, user_id: i32) -> Vec<MeetingPerformanceRow> {
        let enrolled = self.enrolled_meeting_ids(user_id);

        let mut rows: Vec<(Option<NaiveDate>, i32, MeetingPerformanceRow)> = self
            .meetings
            .iter()
            .filter(|m| enrolled.contains(&m.id))
            .map(|m| {
                let slot = self.schedule.get(&m.class_id);
                let (attended, total, rate) = self.meeting_rate(m.id, m.class_id);

                let row = MeetingPerformanceRow {
                    meeting_title: m.titre_fr.clone().unwrap_or_default(),
                    scheduled_day: slot
                        .map(|s| s.day.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "N/A".to_string()),
                    scheduled_time: slot
                        .and_then(|s| s.heure_from.as_deref())
                        .map(format_heure)
                        .unwrap_or_else(|| "N/A".to_string()),
                    attendees_string: format!("{} / {}", attended, total),
                    class_attendance_rate: rate,
                };
                (slot.map(|s| s.day), m.id, row)
            })
            .collect();

        // None < Some : l'ordre décroissant place les séances sans créneau à la fin
        rows.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
        rows.into_iter().map(|(_, _, row)| row).collect()
    }

    /// Utilisateurs distincts du pivot, triés.
    pub fn distinct_users(&self) -> Vec<i32> {
        let set: BTreeSet<i32> = self.enrollments.iter().map(|(uid, _)| *uid).collect();
        set.into_iter().collect()
    }

    /// Étudiants sous le seuil : taux < threshold ET inscriptions >=
    /// min_meetings, triés par taux croissant (id croissant à taux égal).
    pub fn at_risk(&self, threshold: f64, min_meetings: u32) -> Vec<AtRiskStudent> {
        let mut students: Vec<AtRiskStudent> = self
            .distinct_users()
            .into_iter()
            .map(|uid| self.user_stats(uid))
            .filter(|s| s.rate < threshold && s.enrolled_meetings >= min_meetings)
            .map(|s| AtRiskStudent {
                user_id: s.user_id,
                enrolled_meetings: s.enrolled_meetings,
                attended_meetings: s.attended_meetings,
                overall_rate: s.rate,
            })
            .collect();

        students.sort_by(|a, b| {
            a.overall_rate
                .partial_cmp(&b.overall_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.user_id.cmp(&b.user_id))
        });
        students
    }

    /// Liste des séances pour le menu déroulant du frontend : titre non vide,
    /// classe avec au moins un inscrit, une ligne par titre distinct (plus
    /// petit id), triée par titre.
    pub fn meeting_list(&self) -> Vec<MeetingListItem> {
        let mut by_title: BTreeMap<String, (i32, i32)> = BTreeMap::new();
        for m in &self.meetings {
            let Some(title) = m.titre_fr.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            if self.class_roster(m.class_id).is_empty() {
                continue;
            }
            by_title
                .entry(title.to_string())
                .and_modify(|(id, class_id)| {
                    if m.id < *id {
                        *id = m.id;
                        *class_id = m.class_id;
                    }
                })
                .or_insert((m.id, m.class_id));
        }

        by_title
            .into_iter()
            .map(|(titre_fr, (id, class_id))| MeetingListItem {
                id,
                titre_fr,
                class_id,
            })
            .collect()
    }

    /// Vue d'ensemble du système : potentiel vs réel sommé sur toutes les
    /// séances, taux arrondi à 4 décimales.
    pub fn system_overview(&self) -> SystemOverview {
        let classes_with_meetings: BTreeSet<i32> =
            self.meetings.iter().map(|m| m.class_id).collect();

        let mut students: BTreeSet<i32> = BTreeSet::new();
        let mut active_classes: BTreeSet<i32> = BTreeSet::new();
        for class_id in &classes_with_meetings {
            let roster = self.class_roster(*class_id);
            if !roster.is_empty() {
                active_classes.insert(*class_id);
                students.extend(roster);
            }
        }

        // Numérateur : paires (meeting, user) distinctes, déjà dédupliquées
        // à la construction. Dénominateur : somme des effectifs par séance.
        let actual: usize = self
            .attendees_by_meeting
            .values()
            .map(BTreeSet::len)
            .sum();
        let potential: usize = self
            .meetings
            .iter()
            .map(|m| self.class_roster(m.class_id).len())
            .sum();

        if actual > potential {
            tracing::warn!(
                actual,
                potential,
                "distinct participations exceed potential participations; rate capped at 1"
            );
        }

        let rate = if potential > 0 {
            actual.min(potential) as f64 / potential as f64
        } else {
            0.0
        };

        SystemOverview {
            total_students: students.len() as u32,
            total_classes: active_classes.len() as u32,
            total_meetings_held: self.meetings.len() as u32,
            overall_attendance_rate: (rate * 10_000.0).round() / 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(id: i32, title: &str, class_id: i32) -> MeetingRow {
        MeetingRow {
            id,
            titre_fr: Some(title.to_string()),
            class_id,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn class_list_parses_to_discrete_sorted_set() {
        let set = parse_class_list("5,12,7");
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![5, 7, 12]);
    }

    #[test]
    fn class_list_ignores_blanks_and_garbage() {
        let set = parse_class_list(" 3 ,, abc ,3,9 ");
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![3, 9]);
    }

    #[test]
    fn membership_is_not_substring_matching() {
        // "1" apparaît dans "10,12" comme préfixe, mais n'en est pas membre
        let set = parse_class_list("10,12");
        assert!(!set.contains(&1));
        assert!(set.contains(&10));
    }

    #[test]
    fn unknown_user_has_zero_stats_not_an_error() {
        let data = AttendanceData::new(
            vec![(1, 100)],
            vec![(100, "10".to_string())],
            vec![m(1000, "Algo", 10)],
            vec![],
            vec![],
        );
        let stats = data.user_stats(999);
        assert_eq!(stats.enrolled_meetings, 0);
        assert_eq!(stats.attended_meetings, 0);
        assert_eq!(stats.rate, 0.0);
    }

    #[test]
    fn zero_enrollment_never_divides_by_zero() {
        let data = AttendanceData::new(vec![(1, 100)], vec![(100, String::new())], vec![], vec![], vec![]);
        assert_eq!(data.user_stats(1).rate, 0.0);
    }

    #[test]
    fn duplicate_participation_rows_count_once() {
        let data = AttendanceData::new(
            vec![(1, 100)],
            vec![(100, "10".to_string())],
            vec![m(1000, "Algo", 10), m(1001, "Algo 2", 10)],
            // trois lignes pour la même séance
            vec![(1000, 1), (1000, 1), (1000, 1)],
            vec![],
        );
        let stats = data.user_stats(1);
        assert_eq!(stats.enrolled_meetings, 2);
        assert_eq!(stats.attended_meetings, 1);
        assert_eq!(stats.rate, 0.5);
    }

    #[test]
    fn attended_never_exceeds_enrolled_under_dirty_data() {
        // Participations à des séances hors des inscriptions de l'utilisateur
        let data = AttendanceData::new(
            vec![(1, 100)],
            vec![(100, "10".to_string())],
            vec![m(1000, "Algo", 10), m(2000, "Autre classe", 20)],
            vec![(1000, 1), (2000, 1), (3000, 1)],
            vec![],
        );
        let stats = data.user_stats(1);
        assert_eq!(stats.enrolled_meetings, 1);
        assert_eq!(stats.attended_meetings, 1);
        assert!(stats.rate <= 1.0);
    }

    #[test]
    fn union_across_multiple_parcours_deduplicates_classes() {
        let data = AttendanceData::new(
            vec![(1, 100), (1, 101)],
            vec![(100, "10,11".to_string()), (101, "11,12".to_string())],
            vec![m(1, "a", 10), m(2, "b", 11), m(3, "c", 12)],
            vec![],
            vec![],
        );
        assert_eq!(
            data.enrolled_class_ids(1).into_iter().collect::<Vec<_>>(),
            vec![10, 11, 12]
        );
        assert_eq!(data.user_stats(1).enrolled_meetings, 3);
    }

    #[test]
    fn meeting_rate_ignores_attendees_outside_roster() {
        let data = AttendanceData::new(
            vec![(1, 100), (2, 100)],
            vec![(100, "10".to_string())],
            vec![m(1000, "Algo", 10)],
            // l'utilisateur 3 a une présence mais n'est pas dans l'effectif
            vec![(1000, 1), (1000, 3)],
            vec![],
        );
        let (attended, enrolled, rate) = data.meeting_rate(1000, 10);
        assert_eq!((attended, enrolled), (1, 2));
        assert_eq!(rate, 0.5);
    }

    #[test]
    fn meeting_performance_is_ordered_day_desc_then_id_desc() {
        let data = AttendanceData::new(
            vec![(1, 100)],
            vec![(100, "10,20,30".to_string())],
            vec![m(1, "vieux", 10), m(2, "récent", 20), m(3, "sans planning", 30)],
            vec![],
            vec![
                (10, day("2024-01-05"), Some("09:00:00".to_string())),
                (20, day("2024-03-01"), Some("14:30:00".to_string())),
            ],
        );
        let rows = data.meeting_performance(1);
        let titles: Vec<&str> = rows.iter().map(|r| r.meeting_title.as_str()).collect();
        assert_eq!(titles, vec!["récent", "vieux", "sans planning"]);
        assert_eq!(rows[0].scheduled_day, "2024-03-01");
        assert_eq!(rows[0].scheduled_time, "14:30");
        assert_eq!(rows[2].scheduled_day, "N/A");
        assert_eq!(rows[2].scheduled_time, "N/A");
    }

    #[test]
    fn schedule_keeps_latest_day_per_class() {
        let data = AttendanceData::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![
                (10, day("2024-01-05"), Some("09:00:00".to_string())),
                (10, day("2024-02-05"), Some("11:00:00".to_string())),
                (10, day("2024-01-20"), Some("08:00:00".to_string())),
            ],
        );
        let slot = data.schedule_for_class(10).unwrap();
        assert_eq!(slot.day, day("2024-02-05"));
        assert_eq!(slot.heure_from.as_deref(), Some("11:00:00"));
    }

    fn at_risk_fixture() -> AttendanceData {
        // A : 6 séances, 2 présences (taux 0.333) ; B : 3 séances, 1 présence
        // (taux 0.333 mais trop peu d'inscriptions) ; C : 6 séances, 6 présences
        let meetings = vec![
            m(1, "a1", 10),
            m(2, "a2", 10),
            m(3, "a3", 10),
            m(4, "a4", 10),
            m(5, "a5", 10),
            m(6, "a6", 10),
            m(7, "b1", 20),
            m(8, "b2", 20),
            m(9, "b3", 20),
        ];
        let participations = vec![
            (1, 1),
            (2, 1),
            (7, 2),
            (1, 3),
            (2, 3),
            (3, 3),
            (4, 3),
            (5, 3),
            (6, 3),
        ];
        AttendanceData::new(
            vec![(1, 100), (2, 101), (3, 100)],
            vec![(100, "10".to_string()), (101, "20".to_string())],
            meetings,
            participations,
            vec![],
        )
    }

    #[test]
    fn at_risk_applies_threshold_and_minimum_sample() {
        let data = at_risk_fixture();
        let result = data.at_risk(0.6, 5);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user_id, 1);
        assert_eq!(result[0].enrolled_meetings, 6);
        assert_eq!(result[0].attended_meetings, 2);
    }

    #[test]
    fn at_risk_is_monotonic_in_both_parameters() {
        let data = at_risk_fixture();
        let base: Vec<i32> = data.at_risk(0.6, 3).iter().map(|s| s.user_id).collect();
        // seuil plus haut : personne ne disparaît
        let wider: Vec<i32> = data.at_risk(0.9, 3).iter().map(|s| s.user_id).collect();
        for uid in &base {
            assert!(wider.contains(uid));
        }
        // minimum plus haut : personne n'apparaît
        let narrower: Vec<i32> = data.at_risk(0.6, 5).iter().map(|s| s.user_id).collect();
        for uid in &narrower {
            assert!(base.contains(uid));
        }
    }

    #[test]
    fn at_risk_is_ordered_by_rate_ascending() {
        let data = at_risk_fixture();
        let result = data.at_risk(1.1, 0);
        let rates: Vec<f64> = result.iter().map(|s| s.overall_rate).collect();
        let mut sorted = rates.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(rates, sorted);
    }

    #[test]
    fn overview_on_empty_tables_is_all_zero() {
        let data = AttendanceData::new(vec![], vec![], vec![], vec![], vec![]);
        let overview = data.system_overview();
        assert_eq!(overview.total_meetings_held, 0);
        assert_eq!(overview.overall_attendance_rate, 0.0);
        assert_eq!(overview.total_students, 0);
        assert_eq!(overview.total_classes, 0);
    }

    #[test]
    fn overview_counts_potential_vs_actual() {
        // 2 séances de la classe 10 (effectif 2) : potentiel 4, réel 3
        let data = AttendanceData::new(
            vec![(1, 100), (2, 100)],
            vec![(100, "10".to_string())],
            vec![m(1, "a", 10), m(2, "b", 10)],
            vec![(1, 1), (1, 2), (2, 1), (2, 1)],
            vec![],
        );
        let overview = data.system_overview();
        assert_eq!(overview.total_students, 2);
        assert_eq!(overview.total_classes, 1);
        assert_eq!(overview.total_meetings_held, 2);
        assert_eq!(overview.overall_attendance_rate, 0.75);
    }

    #[test]
    fn overview_rate_is_rounded_to_four_decimals() {
        // 1 présence sur 3 potentielles -> 0.3333
        let data = AttendanceData::new(
            vec![(1, 100), (2, 100), (3, 100)],
            vec![(100, "10".to_string())],
            vec![m(1, "a", 10)],
            vec![(1, 1)],
            vec![],
        );
        assert_eq!(data.system_overview().overall_attendance_rate, 0.3333);
    }

    #[test]
    fn meeting_list_deduplicates_titles_and_requires_enrollment() {
        let data = AttendanceData::new(
            vec![(1, 100)],
            vec![(100, "10".to_string())],
            vec![
                m(5, "Algo", 10),
                m(3, "Algo", 10),
                m(7, "Sans inscrits", 99),
                MeetingRow {
                    id: 8,
                    titre_fr: None,
                    class_id: 10,
                },
                MeetingRow {
                    id: 9,
                    titre_fr: Some(String::new()),
                    class_id: 10,
                },
            ],
            vec![],
            vec![],
        );
        let list = data.meeting_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 3);
        assert_eq!(list[0].titre_fr, "Algo");
        assert_eq!(list[0].class_id, 10);
    }

    #[test]
    fn distinct_users_is_sorted_and_deduplicated() {
        let data = AttendanceData::new(
            vec![(3, 100), (1, 100), (3, 101)],
            vec![],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(data.distinct_users(), vec![1, 3]);
    }
}
