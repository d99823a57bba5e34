//! Hotel search and availability aggregation

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use crate::application::services::stay::RoomStayService;
use crate::domain::hotel::Hotel;
use crate::domain::{DomainError, DomainResult, RepositoryProvider, StayPeriod};

pub struct HotelService {
    repos: Arc<dyn RepositoryProvider>,
    stays: Arc<RoomStayService>,
}

impl HotelService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, stays: Arc<RoomStayService>) -> Self {
        Self { repos, stays }
    }

    /// Hotels matching a name, case-insensitive, with their rooms.
    /// Returns an empty list when nothing matches.
    pub async fn get_hotel_by_name(&self, name: &str) -> DomainResult<Vec<Hotel>> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Hotel name cannot be empty".to_string(),
            ));
        }
        if name.len() < 3 {
            return Err(DomainError::Validation(
                "Hotel name must be at least 3 characters long".to_string(),
            ));
        }
        self.repos.hotels().find_by_name(name).await
    }

    /// Hotels able to host `number_of_guests` over the date range, each
    /// carrying only its available rooms. A hotel qualifies iff the
    /// capacity sum of its available rooms covers the guest count; hotels
    /// with no rooms or insufficient capacity are dropped entirely.
    pub async fn get_available_hotel_rooms(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        number_of_guests: i32,
    ) -> DomainResult<Vec<Hotel>> {
        if start_date >= end_date {
            return Err(DomainError::Validation(
                "start date must be before end date".to_string(),
            ));
        }

        let period = StayPeriod::new(start_date, end_date);
        let hotels = self.repos.hotels().find_all_with_stays().await?;

        let mut result = Vec::new();
        for mut hotel in hotels {
            if hotel.rooms.is_empty() {
                continue;
            }

            let mut available = Vec::new();
            for room in hotel.rooms.drain(..) {
                let booked = match self.stays.room_booked(&room, &period).await {
                    Ok(booked) => booked,
                    Err(e) => {
                        // Treat the room as unavailable and keep going
                        warn!(
                            room_id = room.id,
                            hotel_id = hotel.id,
                            error = %e,
                            "Failed checking availability for room"
                        );
                        true
                    }
                };
                if !booked {
                    available.push(room);
                }
            }
            hotel.rooms = available;

            if hotel.total_capacity() >= number_of_guests && !hotel.rooms.is_empty() {
                result.push(hotel);
            }
        }

        Ok(result)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::hotel::RoomType;
    use crate::infrastructure::storage::memory::InMemoryRepositoryProvider;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(repos: Arc<InMemoryRepositoryProvider>) -> HotelService {
        HotelService::new(repos, Arc::new(RoomStayService::new()))
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = service(repos);
        let err = service
            .get_available_hotel_rooms(date(2026, 7, 5), date(2026, 7, 1), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // Equal dates are invalid for availability queries too
        let err = service
            .get_available_hotel_rooms(date(2026, 7, 5), date(2026, 7, 5), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn free_rooms_with_enough_capacity_are_returned() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Single, 1, 75.0, 1);
        repos.add_room(hotel_id, RoomType::Double, 2, 155.0, 2);

        let service = service(repos);
        let hotels = service
            .get_available_hotel_rooms(date(2026, 7, 1), date(2026, 7, 5), 3)
            .await
            .unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].rooms.len(), 2);
    }

    #[tokio::test]
    async fn insufficient_capacity_drops_the_hotel() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Mardon Villa", "28 High St, Redtown", "+44 1417 9258465");
        repos.add_room(hotel_id, RoomType::Single, 1, 75.0, 1);

        let service = service(repos);
        let hotels = service
            .get_available_hotel_rooms(date(2026, 7, 1), date(2026, 7, 5), 4)
            .await
            .unwrap();
        assert!(hotels.is_empty());
    }

    #[tokio::test]
    async fn hotel_with_no_rooms_is_dropped() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        repos.add_hotel("Hilton Heights", "425 Main Rd, Bluefield", "+44 1187 62549785");

        let service = service(repos);
        let hotels = service
            .get_available_hotel_rooms(date(2026, 7, 1), date(2026, 7, 5), 0)
            .await
            .unwrap();
        assert!(hotels.is_empty());
    }

    #[tokio::test]
    async fn boundary_sharing_room_is_excluded() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        let booked = repos.add_room(hotel_id, RoomType::Double, 2, 155.0, 2);
        repos.add_room(hotel_id, RoomType::Double, 3, 150.0, 2);
        repos.add_stay(booked, StayPeriod::new(date(2026, 7, 5), date(2026, 7, 8)));

        let service = service(repos);
        // Query ends on the existing stay's start date: still a conflict
        let hotels = service
            .get_available_hotel_rooms(date(2026, 7, 1), date(2026, 7, 5), 2)
            .await
            .unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].rooms.len(), 1);
        assert_eq!(hotels[0].rooms[0].room_number, 3);
    }

    #[tokio::test]
    async fn gap_separated_room_is_included() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        let room_id = repos.add_room(hotel_id, RoomType::Double, 2, 155.0, 2);
        repos.add_stay(room_id, StayPeriod::new(date(2026, 7, 1), date(2026, 7, 5)));

        let service = service(repos);
        let hotels = service
            .get_available_hotel_rooms(date(2026, 7, 7), date(2026, 7, 9), 2)
            .await
            .unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].rooms[0].room_number, 2);
    }

    #[tokio::test]
    async fn short_name_search_is_rejected() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = service(repos);
        assert!(service.get_hotel_by_name("").await.is_err());
        assert!(service.get_hotel_by_name("  ").await.is_err());
        assert!(service.get_hotel_by_name("Gr").await.is_err());
    }

    #[tokio::test]
    async fn name_search_is_case_insensitive() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Single, 1, 75.0, 1);

        let service = service(repos);
        let hotels = service.get_hotel_by_name("grand plaza").await.unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].rooms.len(), 1);

        let none = service.get_hotel_by_name("Grand Palace").await.unwrap();
        assert!(none.is_empty());
    }
}
