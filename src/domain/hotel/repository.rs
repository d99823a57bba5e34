//! Hotel repository interface

use async_trait::async_trait;

use super::model::{Hotel, Room};
use crate::domain::DomainResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// All hotels with their rooms, each room carrying its current stays
    async fn find_all_with_stays(&self) -> DomainResult<Vec<Hotel>>;

    /// Hotels matching the name, case-insensitive, rooms included
    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Hotel>>;

    /// First hotel with this exact name, rooms not loaded
    async fn find_first_by_name(&self, name: &str) -> DomainResult<Option<Hotel>>;

    /// Room by its composite key (hotel, room number), stays included
    async fn find_room(&self, hotel_id: i32, room_number: i32) -> DomainResult<Option<Room>>;
}
