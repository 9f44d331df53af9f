use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_matiere: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::classe::Entity")]
    Classe,
}

impl Related<super::classe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
