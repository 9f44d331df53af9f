use sea_orm::entity::prelude::*;
use serde::Serialize;

// Une séance planifiée d'une classe.
// Pas de clé étrangère vers planning_cours_journaliers : le créneau d'une
// séance se déduit du planning de sa classe (jour le plus récent).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "meetings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub titre_fr: Option<String>,
    pub id_classe: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classe::Entity",
        from = "Column::IdClasse",
        to = "super::classe::Column::Id"
    )]
    Classe,

    #[sea_orm(has_many = "super::participation_meeting::Entity")]
    ParticipationMeeting,
}

impl Related<super::classe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classe.def()
    }
}

impl Related<super::participation_meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParticipationMeeting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
