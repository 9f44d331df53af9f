use sea_orm::entity::prelude::*;
use serde::Serialize;

// Preuve de présence : une ligne = l'utilisateur a assisté à la séance.
// Pas de ligne "absent". Des doublons (meeting, user) existent dans les
// données réelles et ne doivent jamais gonfler les comptes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "participation_meetings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_meeting: i32,
    pub id_user: i32,
    pub entree: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meeting::Entity",
        from = "Column::IdMeeting",
        to = "super::meeting::Column::Id"
    )]
    Meeting,
}

impl Related<super::meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meeting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
