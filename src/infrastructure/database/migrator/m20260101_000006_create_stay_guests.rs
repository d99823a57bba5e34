//! Create stay_guests table

use sea_orm_migration::prelude::*;

use super::m20260101_000003_create_customers::Customers;
use super::m20260101_000005_create_room_stays::RoomStays;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StayGuests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StayGuests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StayGuests::RoomStayId).integer().not_null())
                    .col(ColumnDef::new(StayGuests::GuestId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stay_guests_room_stay")
                            .from(StayGuests::Table, StayGuests::RoomStayId)
                            .to(RoomStays::Table, RoomStays::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stay_guests_guest")
                            .from(StayGuests::Table, StayGuests::GuestId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stay_guests_room_stay")
                    .table(StayGuests::Table)
                    .col(StayGuests::RoomStayId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StayGuests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum StayGuests {
    Table,
    Id,
    RoomStayId,
    GuestId,
}
