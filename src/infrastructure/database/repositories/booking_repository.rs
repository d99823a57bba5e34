//! SeaORM implementation of BookingRepository
//!
//! `insert_booking` commits the booking with all of its stays and guest
//! links in one database transaction, so a failure mid-insert can never
//! leave a booking row without its stays.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::debug;

use crate::domain::booking::{
    Booking, BookingDetails, BookingRepository, NewBooking, ReferenceStore, StayDetails,
};
use crate::domain::customer::Customer;
use crate::domain::{DomainError, DomainResult, StayPeriod};
use crate::infrastructure::database::entities::{
    booking, customer, hotel, room, room_stay, stay_guest,
};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn booking_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        customer_id: m.customer_id,
        reference: m.reference,
        total_price: m.total_price,
        cancelled: m.cancelled,
    }
}

fn customer_to_domain(m: customer::Model) -> Customer {
    Customer {
        id: m.id,
        first_name: m.first_name,
        last_name: m.last_name,
        address: m.address,
        email: m.email,
        phone: m.phone,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── ReferenceStore impl ─────────────────────────────────────────

#[async_trait]
impl ReferenceStore for SeaOrmBookingRepository {
    async fn reference_exists(&self, reference: &str) -> DomainResult<bool> {
        let model = booking::Entity::find()
            .filter(booking::Column::Reference.eq(reference))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.is_some())
    }
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn stays_for_room(&self, room_id: i32) -> DomainResult<Vec<StayPeriod>> {
        let models = room_stay::Entity::find()
            .filter(room_stay::Column::RoomId.eq(room_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models
            .into_iter()
            .map(|m| StayPeriod::new(m.start_date, m.end_date))
            .collect())
    }

    async fn insert_booking(&self, new: NewBooking) -> DomainResult<Booking> {
        debug!(reference = %new.reference, stays = new.stays.len(), "Inserting booking");

        let txn = self.db.begin().await.map_err(db_err)?;

        let booking_model = booking::ActiveModel {
            customer_id: Set(new.customer_id),
            reference: Set(new.reference),
            total_price: Set(new.total_price),
            cancelled: Set(false),
            ..Default::default()
        };
        let inserted = booking_model.insert(&txn).await.map_err(db_err)?;

        for stay in &new.stays {
            let stay_model = room_stay::ActiveModel {
                booking_id: Set(inserted.id),
                room_id: Set(stay.room_id),
                start_date: Set(stay.period.start_date),
                end_date: Set(stay.period.end_date),
                ..Default::default()
            };
            let inserted_stay = stay_model.insert(&txn).await.map_err(db_err)?;

            for guest_id in &stay.guest_ids {
                let guest_model = stay_guest::ActiveModel {
                    room_stay_id: Set(inserted_stay.id),
                    guest_id: Set(*guest_id),
                    ..Default::default()
                };
                guest_model.insert(&txn).await.map_err(db_err)?;
            }
        }

        txn.commit().await.map_err(db_err)?;
        Ok(booking_to_domain(inserted))
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<BookingDetails>> {
        let Some(booking_model) = booking::Entity::find()
            .filter(booking::Column::Reference.eq(reference))
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let customer_model = customer::Entity::find_by_id(booking_model.customer_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| {
                DomainError::Storage(format!(
                    "Booking {} references missing customer {}",
                    booking_model.id, booking_model.customer_id
                ))
            })?;

        let stay_models = room_stay::Entity::find()
            .filter(room_stay::Column::BookingId.eq(booking_model.id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut stays = Vec::with_capacity(stay_models.len());
        for stay_model in stay_models {
            let room_model = room::Entity::find_by_id(stay_model.room_id)
                .one(&self.db)
                .await
                .map_err(db_err)?
                .ok_or_else(|| {
                    DomainError::Storage(format!(
                        "Room stay {} references missing room {}",
                        stay_model.id, stay_model.room_id
                    ))
                })?;
            let hotel_model = hotel::Entity::find_by_id(room_model.hotel_id)
                .one(&self.db)
                .await
                .map_err(db_err)?
                .ok_or_else(|| {
                    DomainError::Storage(format!(
                        "Room {} references missing hotel {}",
                        room_model.id, room_model.hotel_id
                    ))
                })?;

            let guest_links = stay_guest::Entity::find()
                .filter(stay_guest::Column::RoomStayId.eq(stay_model.id))
                .all(&self.db)
                .await
                .map_err(db_err)?;
            let guest_ids: Vec<i32> = guest_links.iter().map(|g| g.guest_id).collect();
            let guest_models = if guest_ids.is_empty() {
                Vec::new()
            } else {
                customer::Entity::find()
                    .filter(customer::Column::Id.is_in(guest_ids.clone()))
                    .all(&self.db)
                    .await
                    .map_err(db_err)?
            };
            let guests_by_id: HashMap<i32, Customer> = guest_models
                .into_iter()
                .map(|m| (m.id, customer_to_domain(m)))
                .collect();
            let guests = guest_ids
                .into_iter()
                .filter_map(|id| guests_by_id.get(&id).cloned())
                .collect();

            stays.push(StayDetails {
                hotel_name: hotel_model.name,
                room_number: room_model.room_number,
                period: StayPeriod::new(stay_model.start_date, stay_model.end_date),
                guests,
            });
        }

        Ok(Some(BookingDetails {
            reference: booking_model.reference,
            customer: customer_to_domain(customer_model),
            total_price: booking_model.total_price,
            cancelled: booking_model.cancelled,
            stays,
        }))
    }
}
