//! SeaORM implementation of HotelRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::hotel::{Hotel, HotelRepository, Room, RoomType};
use crate::domain::{DomainError, DomainResult, StayPeriod};
use crate::infrastructure::database::entities::{hotel, room, room_stay};

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn stays_by_room(&self, room_ids: &[i32]) -> DomainResult<HashMap<i32, Vec<StayPeriod>>> {
        if room_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = room_stay::Entity::find()
            .filter(room_stay::Column::RoomId.is_in(room_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut by_room: HashMap<i32, Vec<StayPeriod>> = HashMap::new();
        for m in models {
            by_room
                .entry(m.room_id)
                .or_default()
                .push(StayPeriod::new(m.start_date, m.end_date));
        }
        Ok(by_room)
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn room_to_domain(m: room::Model, stays: Vec<StayPeriod>) -> Room {
    Room {
        id: m.id,
        hotel_id: m.hotel_id,
        room_type: RoomType::from_str(&m.room_type),
        room_number: m.room_number,
        price_per_night: m.price_per_night,
        capacity: m.capacity,
        stays,
    }
}

fn hotel_to_domain(m: hotel::Model, rooms: Vec<Room>) -> Hotel {
    Hotel {
        id: m.id,
        name: m.name,
        address: m.address,
        phone: m.phone,
        rooms,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── HotelRepository impl ────────────────────────────────────────

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn find_all_with_stays(&self) -> DomainResult<Vec<Hotel>> {
        let hotels = hotel::Entity::find()
            .find_with_related(room::Entity)
            .order_by_asc(hotel::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let room_ids: Vec<i32> = hotels
            .iter()
            .flat_map(|(_, rooms)| rooms.iter().map(|r| r.id))
            .collect();
        let mut stays = self.stays_by_room(&room_ids).await?;

        Ok(hotels
            .into_iter()
            .map(|(h, rooms)| {
                let rooms = rooms
                    .into_iter()
                    .map(|r| {
                        let room_stays = stays.remove(&r.id).unwrap_or_default();
                        room_to_domain(r, room_stays)
                    })
                    .collect();
                hotel_to_domain(h, rooms)
            })
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Hotel>> {
        let hotels = hotel::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(hotel::Column::Name))).eq(name.to_lowercase()),
            )
            .find_with_related(room::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(hotels
            .into_iter()
            .map(|(h, rooms)| {
                let rooms = rooms
                    .into_iter()
                    .map(|r| room_to_domain(r, Vec::new()))
                    .collect();
                hotel_to_domain(h, rooms)
            })
            .collect())
    }

    async fn find_first_by_name(&self, name: &str) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find()
            .filter(hotel::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(|h| hotel_to_domain(h, Vec::new())))
    }

    async fn find_room(&self, hotel_id: i32, room_number: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find()
            .filter(room::Column::HotelId.eq(hotel_id))
            .filter(room::Column::RoomNumber.eq(room_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };
        let mut stays = self.stays_by_room(&[model.id]).await?;
        let room_stays = stays.remove(&model.id).unwrap_or_default();
        Ok(Some(room_to_domain(model, room_stays)))
    }
}
