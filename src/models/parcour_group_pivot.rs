use sea_orm::entity::prelude::*;
use serde::Serialize;

// Pivot inscrivant un utilisateur dans un parcours.
// Un utilisateur peut apparaître dans plusieurs lignes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "parcour_group_pivot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub id_parcour_classes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parcours_classes::Entity",
        from = "Column::IdParcourClasses",
        to = "super::parcours_classes::Column::Id"
    )]
    ParcoursClasses,
}

impl Related<super::parcours_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParcoursClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
