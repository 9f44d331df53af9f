use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_cours: i32,
    pub id_professeur: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cours::Entity",
        from = "Column::IdCours",
        to = "super::cours::Column::Id"
    )]
    Cours,

    #[sea_orm(has_many = "super::meeting::Entity")]
    Meeting,
}

impl Related<super::cours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cours.def()
    }
}

impl Related<super::meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meeting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
