//! Booking creation and retrieval
//!
//! `create_booking` is the one write path in the system: it validates the
//! request against live room state and commits the whole booking graph in
//! a single storage transaction, holding per-room locks across the
//! availability check and the insert so concurrent requests for the same
//! room serialize instead of double-booking.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::clock::Clock;
use crate::application::reference::ReferenceGenerator;
use crate::application::room_lock::RoomLockRegistry;
use crate::application::services::stay::RoomStayService;
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::hotel::Room;
use crate::domain::{
    DomainError, DomainResult, NewBooking, NewRoomStay, RepositoryProvider, StayPeriod,
};

/// Customer fields as supplied by a booking request
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl CustomerDetails {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One requested room with its guests
#[derive(Debug, Clone)]
pub struct RoomLine {
    pub hotel_name: String,
    pub room_number: i32,
    pub guests: Vec<CustomerDetails>,
}

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub customer: CustomerDetails,
    pub hotel_name: String,
    pub rooms: Vec<RoomLine>,
    pub period: StayPeriod,
}

#[derive(Debug, Clone)]
pub struct RoomStaySummary {
    pub hotel_name: String,
    pub room_number: String,
    pub period: StayPeriod,
    pub guests: Vec<String>,
}

/// Outcome of booking creation or lookup. An empty reference together
/// with the accompanying message signals a business failure.
#[derive(Debug, Clone, Default)]
pub struct BookingResponse {
    pub customer_name: String,
    pub reference: String,
    pub total_price: f64,
    pub room_stays: Vec<RoomStaySummary>,
}

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    stays: Arc<RoomStayService>,
    references: Arc<ReferenceGenerator>,
    room_locks: Arc<RoomLockRegistry>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        stays: Arc<RoomStayService>,
        references: Arc<ReferenceGenerator>,
        room_locks: Arc<RoomLockRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            stays,
            references,
            room_locks,
            clock,
        }
    }

    /// Create a booking for one hotel spanning any number of rooms.
    ///
    /// Business failures (unknown hotel or room, room already taken) are
    /// returned as a response with an empty reference plus a message;
    /// `Err` is reserved for storage failures. Nothing is persisted on a
    /// business failure.
    pub async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> DomainResult<(BookingResponse, String)> {
        let response = BookingResponse::default();
        let period = request.period;

        if period.end_date < period.start_date {
            return Err(DomainError::Validation(
                "End date must be later than or equal to start date".to_string(),
            ));
        }
        if period.start_date <= self.clock.today() {
            return Err(DomainError::Validation(
                "Start date must be in the future".to_string(),
            ));
        }

        let customer = self.resolve_customer(&request.customer).await?;

        let Some(hotel) = self
            .repos
            .hotels()
            .find_first_by_name(&request.hotel_name)
            .await?
        else {
            let message = format!("Hotel not found: {}", request.hotel_name);
            error!("{}", message);
            return Ok((response, message));
        };

        // Resolve every requested room before touching any lock
        let mut resolved: Vec<(&RoomLine, Room)> = Vec::with_capacity(request.rooms.len());
        for line in &request.rooms {
            let Some(room) = self
                .repos
                .hotels()
                .find_room(hotel.id, line.room_number)
                .await?
            else {
                let message = format!(
                    "Room not found: Hotel '{}', Room Number '{}'",
                    line.hotel_name, line.room_number
                );
                error!("{}", message);
                return Ok((response, message));
            };
            resolved.push((line, room));
        }

        // Hold every room's lock from the availability check until the
        // insert commits; competing requests for the same room serialize
        // here and the loser sees the winner's stays.
        let room_ids: Vec<i32> = resolved.iter().map(|(_, room)| room.id).collect();
        let _guards = self.room_locks.lock_rooms(&room_ids).await;

        for (line, room) in &mut resolved {
            room.stays = self.repos.bookings().stays_for_room(room.id).await?;
            if self.stays.room_booked(room, &period).await? {
                let message = format!(
                    "Room not available: Hotel '{}', Room Number '{}'",
                    line.hotel_name, line.room_number
                );
                error!("{}", message);
                return Ok((response, message));
            }
        }

        // EndDate is the last night of occupation; checkout is the
        // following morning
        let nights = period.nights();
        let total_price: f64 = resolved
            .iter()
            .map(|(_, room)| room.price_per_night * nights as f64)
            .sum();

        let reference = self
            .references
            .unique_reference(self.repos.bookings())
            .await?;

        let mut stays = Vec::with_capacity(resolved.len());
        for (line, room) in &resolved {
            let mut guest_ids = Vec::with_capacity(line.guests.len());
            for guest in &line.guests {
                guest_ids.push(self.resolve_customer(guest).await?.id);
            }
            stays.push(NewRoomStay {
                room_id: room.id,
                period,
                guest_ids,
            });
        }

        let booking = self
            .repos
            .bookings()
            .insert_booking(NewBooking {
                customer_id: customer.id,
                reference: reference.clone(),
                total_price,
                stays,
            })
            .await?;

        info!(
            booking_id = booking.id,
            reference = %reference,
            rooms = resolved.len(),
            total_price,
            "Booking created"
        );

        let response = BookingResponse {
            // Display name comes from the request, not the stored
            // customer row
            customer_name: request.customer.display_name(),
            reference,
            total_price,
            room_stays: resolved
                .iter()
                .map(|(line, _)| RoomStaySummary {
                    hotel_name: line.hotel_name.clone(),
                    room_number: line.room_number.to_string(),
                    period,
                    guests: line.guests.iter().map(|g| g.display_name()).collect(),
                })
                .collect(),
        };
        Ok((response, "Booking Complete".to_string()))
    }

    /// Booking by its public reference, assembled from stored rows
    pub async fn get_booking_by_reference(&self, reference: &str) -> DomainResult<BookingResponse> {
        let details = self
            .repos
            .bookings()
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| {
                error!("Booking not found: {}", reference);
                DomainError::NotFound {
                    entity: "Booking",
                    field: "reference",
                    value: reference.to_string(),
                }
            })?;

        Ok(BookingResponse {
            customer_name: details.customer.display_name(),
            reference: details.reference,
            total_price: details.total_price,
            room_stays: details
                .stays
                .into_iter()
                .map(|stay| RoomStaySummary {
                    hotel_name: stay.hotel_name,
                    room_number: stay.room_number.to_string(),
                    period: stay.period,
                    guests: stay.guests.iter().map(Customer::display_name).collect(),
                })
                .collect(),
        })
    }

    /// Find-or-create by email. An existing row wins: the supplied
    /// fields are not written back over it.
    async fn resolve_customer(&self, details: &CustomerDetails) -> DomainResult<Customer> {
        if let Some(existing) = self.repos.customers().find_by_email(&details.email).await? {
            return Ok(existing);
        }
        self.repos
            .customers()
            .insert(NewCustomer {
                first_name: details.first_name.clone(),
                last_name: details.last_name.clone(),
                address: details.address.clone(),
                email: details.email.clone(),
                phone: details.phone.clone(),
            })
            .await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::application::reference::{
        DEFAULT_ALPHABET, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_LENGTH,
    };
    use crate::domain::hotel::RoomType;
    use crate::infrastructure::storage::memory::InMemoryRepositoryProvider;

    const TODAY: &str = "2026-08-01";

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn today() -> NaiveDate {
        TODAY.parse().unwrap()
    }

    fn service(repos: Arc<InMemoryRepositoryProvider>) -> BookingService {
        BookingService::new(
            repos,
            Arc::new(RoomStayService::new()),
            Arc::new(
                ReferenceGenerator::new(DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH, DEFAULT_MAX_ATTEMPTS)
                    .unwrap(),
            ),
            Arc::new(RoomLockRegistry::new()),
            Arc::new(FixedClock(today())),
        )
    }

    fn booker() -> CustomerDetails {
        CustomerDetails {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "456 Elm St, Townsville".to_string(),
            email: "jdoe@highdon.com".to_string(),
            phone: "+44 1294 567890".to_string(),
        }
    }

    fn guest(first: &str, last: &str, email: &str) -> CustomerDetails {
        CustomerDetails {
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: String::new(),
            email: email.to_string(),
            phone: "+44 1934 3451915".to_string(),
        }
    }

    fn request(hotel: &str, rooms: Vec<RoomLine>, period: StayPeriod) -> BookingRequest {
        BookingRequest {
            customer: booker(),
            hotel_name: hotel.to_string(),
            rooms,
            period,
        }
    }

    fn line(hotel: &str, room_number: i32, guests: Vec<CustomerDetails>) -> RoomLine {
        RoomLine {
            hotel_name: hotel.to_string(),
            room_number,
            guests,
        }
    }

    fn two_nights_from_tomorrow() -> StayPeriod {
        StayPeriod::new(today() + Duration::days(1), today() + Duration::days(2))
    }

    #[tokio::test]
    async fn two_night_stay_is_priced_per_night() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Double, 2, 50.0, 2);
        let service = service(repos.clone());

        let (response, message) = service
            .create_booking(request(
                "Grand Plaza",
                vec![line("Grand Plaza", 2, vec![guest("Jane", "Carter", "jcarter@gmail.com")])],
                two_nights_from_tomorrow(),
            ))
            .await
            .unwrap();

        assert_eq!(message, "Booking Complete");
        assert!(!response.reference.is_empty());
        assert_eq!(response.customer_name, "John Doe");
        assert_eq!(response.total_price, 100.0);
        assert_eq!(response.room_stays.len(), 1);
        assert_eq!(response.room_stays[0].guests, vec!["Jane Carter".to_string()]);
        assert_eq!(repos.room_stay_count(), 1);
    }

    #[tokio::test]
    async fn stored_price_round_trips_through_lookup() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Single, 1, 75.0, 1);
        repos.add_room(hotel_id, RoomType::Double, 2, 155.0, 2);
        let service = service(repos.clone());

        let period = StayPeriod::new(today() + Duration::days(1), today() + Duration::days(4));
        let (created, _) = service
            .create_booking(request(
                "Grand Plaza",
                vec![
                    line("Grand Plaza", 1, vec![guest("Paul", "Pope", "ppope@futuremail.co.uk")]),
                    line("Grand Plaza", 2, vec![guest("Jane", "Carter", "jcarter@gmail.com")]),
                ],
                period,
            ))
            .await
            .unwrap();

        // 4 nights, 75 + 155 per night
        assert_eq!(created.total_price, 920.0);

        let looked_up = service
            .get_booking_by_reference(&created.reference)
            .await
            .unwrap();
        assert_eq!(looked_up.reference, created.reference);
        assert_eq!(looked_up.total_price, created.total_price);
        assert_eq!(looked_up.room_stays.len(), 2);
        // Lookup shows the stored customer's name
        assert_eq!(looked_up.customer_name, "John Doe");
        let mut rooms: Vec<&str> = looked_up
            .room_stays
            .iter()
            .map(|s| s.room_number.as_str())
            .collect();
        rooms.sort_unstable();
        assert_eq!(rooms, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn repeated_email_reuses_the_customer_row() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Double, 2, 50.0, 2);
        repos.add_room(hotel_id, RoomType::Double, 3, 50.0, 2);
        let service = service(repos.clone());

        let first = request(
            "Grand Plaza",
            vec![line("Grand Plaza", 2, vec![])],
            two_nights_from_tomorrow(),
        );
        let mut second = request(
            "Grand Plaza",
            vec![line("Grand Plaza", 3, vec![])],
            StayPeriod::new(today() + Duration::days(10), today() + Duration::days(12)),
        );
        // Same email, different spelling of the name: the stored row wins
        second.customer.first_name = "Jonathan".to_string();

        let (first_response, _) = service.create_booking(first).await.unwrap();
        let (second_response, _) = service.create_booking(second).await.unwrap();
        assert!(!first_response.reference.is_empty());
        assert!(!second_response.reference.is_empty());
        assert_eq!(repos.customer_count_for_email("jdoe@highdon.com"), 1);

        // Creation echoes the request's name even when the row was reused
        assert_eq!(second_response.customer_name, "Jonathan Doe");
        let stored = service
            .get_booking_by_reference(&second_response.reference)
            .await
            .unwrap();
        assert_eq!(stored.customer_name, "John Doe");
    }

    #[tokio::test]
    async fn booker_and_guest_sharing_an_email_resolve_to_one_row() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Double, 2, 50.0, 2);
        let service = service(repos.clone());

        let (response, _) = service
            .create_booking(request(
                "Grand Plaza",
                vec![line(
                    "Grand Plaza",
                    2,
                    vec![guest("John", "Doe", "jdoe@highdon.com")],
                )],
                two_nights_from_tomorrow(),
            ))
            .await
            .unwrap();

        assert!(!response.reference.is_empty());
        assert_eq!(repos.customer_count_for_email("jdoe@highdon.com"), 1);
    }

    #[tokio::test]
    async fn unknown_hotel_fails_without_persisting() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = service(repos.clone());

        let (response, message) = service
            .create_booking(request(
                "Grand Palace",
                vec![line("Grand Palace", 1, vec![])],
                two_nights_from_tomorrow(),
            ))
            .await
            .unwrap();

        assert!(response.reference.is_empty());
        assert_eq!(message, "Hotel not found: Grand Palace");
        assert_eq!(repos.booking_count(), 0);
        assert_eq!(repos.room_stay_count(), 0);
    }

    #[tokio::test]
    async fn unknown_room_fails_without_persisting() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Single, 1, 75.0, 1);
        let service = service(repos.clone());

        let (response, message) = service
            .create_booking(request(
                "Grand Plaza",
                vec![line("Grand Plaza", 9, vec![])],
                two_nights_from_tomorrow(),
            ))
            .await
            .unwrap();

        assert!(response.reference.is_empty());
        assert_eq!(message, "Room not found: Hotel 'Grand Plaza', Room Number '9'");
        assert_eq!(repos.booking_count(), 0);
    }

    #[tokio::test]
    async fn overlapping_stay_fails_with_room_not_available() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        let room_id = repos.add_room(hotel_id, RoomType::Double, 2, 50.0, 2);
        repos.add_stay(
            room_id,
            StayPeriod::new(today() + Duration::days(2), today() + Duration::days(4)),
        );
        let service = service(repos.clone());

        // Shares a boundary and interior dates with the existing stay
        let (response, message) = service
            .create_booking(request(
                "Grand Plaza",
                vec![line("Grand Plaza", 2, vec![])],
                StayPeriod::new(today() + Duration::days(3), today() + Duration::days(5)),
            ))
            .await
            .unwrap();

        assert!(response.reference.is_empty());
        assert_eq!(
            message,
            "Room not available: Hotel 'Grand Plaza', Room Number '2'"
        );
        assert_eq!(repos.booking_count(), 0);
        assert_eq!(repos.room_stay_count(), 1);
    }

    #[tokio::test]
    async fn one_unavailable_room_aborts_the_whole_request() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Single, 1, 75.0, 1);
        let taken = repos.add_room(hotel_id, RoomType::Double, 2, 155.0, 2);
        repos.add_stay(
            taken,
            StayPeriod::new(today() + Duration::days(1), today() + Duration::days(3)),
        );
        let service = service(repos.clone());

        let (response, message) = service
            .create_booking(request(
                "Grand Plaza",
                vec![
                    line("Grand Plaza", 1, vec![]),
                    line("Grand Plaza", 2, vec![]),
                ],
                two_nights_from_tomorrow(),
            ))
            .await
            .unwrap();

        assert!(response.reference.is_empty());
        assert!(message.contains("Room not available"));
        // No partial booking: the free room gained no stay either
        assert_eq!(repos.booking_count(), 0);
        assert_eq!(repos.room_stay_count(), 1);
    }

    #[tokio::test]
    async fn zero_room_booking_is_created_with_zero_price() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        let service = service(repos.clone());

        let (response, message) = service
            .create_booking(request("Grand Plaza", vec![], two_nights_from_tomorrow()))
            .await
            .unwrap();

        assert_eq!(message, "Booking Complete");
        assert!(!response.reference.is_empty());
        assert_eq!(response.total_price, 0.0);
        assert!(response.room_stays.is_empty());
        assert_eq!(repos.booking_count(), 1);
    }

    #[tokio::test]
    async fn past_start_date_is_rejected() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = service(repos);

        let err = service
            .create_booking(request(
                "Grand Plaza",
                vec![],
                StayPeriod::new(today(), today() + Duration::days(1)),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn inverted_dates_are_rejected() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = service(repos);

        let err = service
            .create_booking(request(
                "Grand Plaza",
                vec![],
                StayPeriod::new(today() + Duration::days(5), today() + Duration::days(2)),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_reference_lookup_misses() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = service(repos);

        let err = service.get_booking_by_reference("").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn concurrent_bookings_for_one_room_admit_exactly_one() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hotel_id = repos.add_hotel("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123");
        repos.add_room(hotel_id, RoomType::Double, 2, 50.0, 2);
        let service = Arc::new(service(repos.clone()));

        let period = two_nights_from_tomorrow();
        let mut tasks = Vec::new();
        for i in 0..2 {
            let service = service.clone();
            let mut req = request("Grand Plaza", vec![line("Grand Plaza", 2, vec![])], period);
            req.customer.email = format!("booker{}@highdon.com", i);
            tasks.push(tokio::spawn(async move {
                service.create_booking(req).await.unwrap()
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for task in tasks {
            let (response, message) = task.await.unwrap();
            if response.reference.is_empty() {
                assert!(message.contains("Room not available"));
                conflicts += 1;
            } else {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 1);
        assert_eq!(repos.room_stay_count(), 1);
    }
}
