use sea_orm::entity::prelude::*;
use serde::Serialize;

// Un parcours et sa liste de classes.
// `classes` est une chaîne d'ids séparés par des virgules ("5,12,7"),
// pas une vraie relation many-to-many : le système d'inscription la stocke
// telle quelle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "parcours_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub classes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::parcour_group_pivot::Entity")]
    ParcourGroupPivot,
}

impl Related<super::parcour_group_pivot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParcourGroupPivot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
