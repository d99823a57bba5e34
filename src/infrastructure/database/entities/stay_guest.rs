//! Stay guest entity
//!
//! Links a customer to the room stay they occupy.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stay_guests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub room_stay_id: i32,
    pub guest_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_stay::Entity",
        from = "Column::RoomStayId",
        to = "super::room_stay::Column::Id"
    )]
    RoomStay,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::GuestId",
        to = "super::customer::Column::Id"
    )]
    Guest,
}

impl Related<super::room_stay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomStay.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
