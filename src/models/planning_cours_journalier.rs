use sea_orm::entity::prelude::*;
use serde::Serialize;

// Créneau calendaire d'une classe. Une classe peut en avoir plusieurs ;
// heure_from arrive au format "HH:MM:SS".
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "planning_cours_journaliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_classe: i32,
    pub day: Option<Date>,
    pub heure_from: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classe::Entity",
        from = "Column::IdClasse",
        to = "super::classe::Column::Id"
    )]
    Classe,
}

impl Related<super::classe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
