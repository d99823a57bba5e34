//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_hotels;
mod m20260101_000002_create_rooms;
mod m20260101_000003_create_customers;
mod m20260101_000004_create_bookings;
mod m20260101_000005_create_room_stays;
mod m20260101_000006_create_stay_guests;
mod m20260101_000007_create_payments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_hotels::Migration),
            Box::new(m20260101_000002_create_rooms::Migration),
            Box::new(m20260101_000003_create_customers::Migration),
            Box::new(m20260101_000004_create_bookings::Migration),
            Box::new(m20260101_000005_create_room_stays::Migration),
            Box::new(m20260101_000006_create_stay_guests::Migration),
            Box::new(m20260101_000007_create_payments::Migration),
        ]
    }
}
