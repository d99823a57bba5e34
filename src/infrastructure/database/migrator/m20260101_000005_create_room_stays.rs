//! Create room_stays table
//!
//! Dates are calendar dates; end_date is the last occupied night.

use sea_orm_migration::prelude::*;

use super::m20260101_000002_create_rooms::Rooms;
use super::m20260101_000004_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomStays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomStays::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomStays::BookingId).integer().not_null())
                    .col(ColumnDef::new(RoomStays::RoomId).integer().not_null())
                    .col(ColumnDef::new(RoomStays::StartDate).date().not_null())
                    .col(ColumnDef::new(RoomStays::EndDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_stays_booking")
                            .from(RoomStays::Table, RoomStays::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_stays_room")
                            .from(RoomStays::Table, RoomStays::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_stays_room")
                    .table(RoomStays::Table)
                    .col(RoomStays::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_stays_booking")
                    .table(RoomStays::Table)
                    .col(RoomStays::BookingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomStays::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RoomStays {
    Table,
    Id,
    BookingId,
    RoomId,
    StartDate,
    EndDate,
}
