//! In-memory repository provider for development and testing

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use dashmap::DashMap;

use crate::domain::booking::{
    Booking, BookingDetails, BookingRepository, NewBooking, ReferenceStore, RoomStay, StayDetails,
    StayGuest,
};
use crate::domain::customer::{Customer, CustomerRepository, NewCustomer};
use crate::domain::hotel::{Hotel, HotelRepository, Room, RoomType};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainResult, StayPeriod};

/// Shared in-memory tables
struct InMemoryStore {
    hotels: DashMap<i32, Hotel>,
    rooms: DashMap<i32, Room>,
    customers: DashMap<i32, Customer>,
    bookings: DashMap<i32, Booking>,
    room_stays: DashMap<i32, RoomStay>,
    stay_guests: DashMap<i32, StayGuest>,
    hotel_counter: AtomicI32,
    room_counter: AtomicI32,
    customer_counter: AtomicI32,
    booking_counter: AtomicI32,
    stay_counter: AtomicI32,
    guest_counter: AtomicI32,
}

impl InMemoryStore {
    fn new() -> Self {
        Self {
            hotels: DashMap::new(),
            rooms: DashMap::new(),
            customers: DashMap::new(),
            bookings: DashMap::new(),
            room_stays: DashMap::new(),
            stay_guests: DashMap::new(),
            hotel_counter: AtomicI32::new(1),
            room_counter: AtomicI32::new(1),
            customer_counter: AtomicI32::new(1),
            booking_counter: AtomicI32::new(1),
            stay_counter: AtomicI32::new(1),
            guest_counter: AtomicI32::new(1),
        }
    }

    fn stays_for_room(&self, room_id: i32) -> Vec<StayPeriod> {
        let mut stays: Vec<(i32, StayPeriod)> = self
            .room_stays
            .iter()
            .filter(|entry| entry.room_id == room_id)
            .map(|entry| (entry.id, entry.period))
            .collect();
        stays.sort_by_key(|(id, _)| *id);
        stays.into_iter().map(|(_, period)| period).collect()
    }

    fn rooms_for_hotel(&self, hotel_id: i32, with_stays: bool) -> Vec<Room> {
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|entry| entry.hotel_id == hotel_id)
            .map(|entry| entry.value().clone())
            .collect();
        rooms.sort_by_key(|r| r.id);
        if with_stays {
            for room in &mut rooms {
                room.stays = self.stays_for_room(room.id);
            }
        }
        rooms
    }
}

// ── Repositories ────────────────────────────────────────────────

pub struct InMemoryHotelRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn find_all_with_stays(&self) -> DomainResult<Vec<Hotel>> {
        let mut hotels: Vec<Hotel> = self
            .store
            .hotels
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        hotels.sort_by_key(|h| h.id);
        for hotel in &mut hotels {
            hotel.rooms = self.store.rooms_for_hotel(hotel.id, true);
        }
        Ok(hotels)
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Hotel>> {
        let wanted = name.to_lowercase();
        let mut hotels: Vec<Hotel> = self
            .store
            .hotels
            .iter()
            .filter(|entry| entry.name.to_lowercase() == wanted)
            .map(|entry| entry.value().clone())
            .collect();
        hotels.sort_by_key(|h| h.id);
        for hotel in &mut hotels {
            hotel.rooms = self.store.rooms_for_hotel(hotel.id, false);
        }
        Ok(hotels)
    }

    async fn find_first_by_name(&self, name: &str) -> DomainResult<Option<Hotel>> {
        let mut hotels: Vec<Hotel> = self
            .store
            .hotels
            .iter()
            .filter(|entry| entry.name == name)
            .map(|entry| entry.value().clone())
            .collect();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels.into_iter().next())
    }

    async fn find_room(&self, hotel_id: i32, room_number: i32) -> DomainResult<Option<Room>> {
        let room = self
            .store
            .rooms
            .iter()
            .find(|entry| entry.hotel_id == hotel_id && entry.room_number == room_number)
            .map(|entry| entry.value().clone());
        Ok(room.map(|mut room| {
            room.stays = self.store.stays_for_room(room.id);
            room
        }))
    }
}

pub struct InMemoryCustomerRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>> {
        let mut matches: Vec<Customer> = self
            .store
            .customers
            .iter()
            .filter(|entry| entry.email == email)
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by_key(|c| c.id);
        Ok(matches.into_iter().next())
    }

    async fn insert(&self, new: NewCustomer) -> DomainResult<Customer> {
        let id = self.store.customer_counter.fetch_add(1, Ordering::SeqCst);
        let customer = Customer {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            address: new.address,
            email: new.email,
            phone: new.phone,
        };
        self.store.customers.insert(id, customer.clone());
        Ok(customer)
    }
}

pub struct InMemoryBookingRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ReferenceStore for InMemoryBookingRepository {
    async fn reference_exists(&self, reference: &str) -> DomainResult<bool> {
        Ok(self
            .store
            .bookings
            .iter()
            .any(|entry| entry.reference == reference))
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn stays_for_room(&self, room_id: i32) -> DomainResult<Vec<StayPeriod>> {
        Ok(self.store.stays_for_room(room_id))
    }

    async fn insert_booking(&self, new: NewBooking) -> DomainResult<Booking> {
        let id = self.store.booking_counter.fetch_add(1, Ordering::SeqCst);
        let booking = Booking {
            id,
            customer_id: new.customer_id,
            reference: new.reference,
            total_price: new.total_price,
            cancelled: false,
        };
        self.store.bookings.insert(id, booking.clone());

        for stay in new.stays {
            let stay_id = self.store.stay_counter.fetch_add(1, Ordering::SeqCst);
            self.store.room_stays.insert(
                stay_id,
                RoomStay {
                    id: stay_id,
                    booking_id: id,
                    room_id: stay.room_id,
                    period: stay.period,
                },
            );
            for guest_id in stay.guest_ids {
                let link_id = self.store.guest_counter.fetch_add(1, Ordering::SeqCst);
                self.store.stay_guests.insert(
                    link_id,
                    StayGuest {
                        id: link_id,
                        room_stay_id: stay_id,
                        guest_id,
                    },
                );
            }
        }
        Ok(booking)
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<BookingDetails>> {
        let Some(booking) = self
            .store
            .bookings
            .iter()
            .find(|entry| entry.reference == reference)
            .map(|entry| entry.value().clone())
        else {
            return Ok(None);
        };

        let customer = self
            .store
            .customers
            .get(&booking.customer_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| Customer {
                id: booking.customer_id,
                first_name: String::new(),
                last_name: String::new(),
                address: String::new(),
                email: String::new(),
                phone: String::new(),
            });

        let mut stay_rows: Vec<RoomStay> = self
            .store
            .room_stays
            .iter()
            .filter(|entry| entry.booking_id == booking.id)
            .map(|entry| entry.value().clone())
            .collect();
        stay_rows.sort_by_key(|s| s.id);

        let mut stays = Vec::with_capacity(stay_rows.len());
        for stay in stay_rows {
            let (hotel_name, room_number) = self
                .store
                .rooms
                .get(&stay.room_id)
                .map(|room| {
                    let hotel_name = self
                        .store
                        .hotels
                        .get(&room.hotel_id)
                        .map(|h| h.name.clone())
                        .unwrap_or_default();
                    (hotel_name, room.room_number)
                })
                .unwrap_or_default();

            let mut guest_links: Vec<StayGuest> = self
                .store
                .stay_guests
                .iter()
                .filter(|entry| entry.room_stay_id == stay.id)
                .map(|entry| entry.value().clone())
                .collect();
            guest_links.sort_by_key(|g| g.id);
            let guests = guest_links
                .into_iter()
                .filter_map(|link| {
                    self.store
                        .customers
                        .get(&link.guest_id)
                        .map(|entry| entry.value().clone())
                })
                .collect();

            stays.push(StayDetails {
                hotel_name,
                room_number,
                period: stay.period,
                guests,
            });
        }

        Ok(Some(BookingDetails {
            reference: booking.reference,
            customer,
            total_price: booking.total_price,
            cancelled: booking.cancelled,
            stays,
        }))
    }
}

// ── Provider ────────────────────────────────────────────────────

/// Repository provider backed by in-memory tables, with helpers for
/// assembling fixture catalogs.
pub struct InMemoryRepositoryProvider {
    store: Arc<InMemoryStore>,
    hotels: InMemoryHotelRepository,
    customers: InMemoryCustomerRepository,
    bookings: InMemoryBookingRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            hotels: InMemoryHotelRepository {
                store: store.clone(),
            },
            customers: InMemoryCustomerRepository {
                store: store.clone(),
            },
            bookings: InMemoryBookingRepository {
                store: store.clone(),
            },
            store,
        }
    }

    pub fn add_hotel(&self, name: &str, address: &str, phone: &str) -> i32 {
        let id = self.store.hotel_counter.fetch_add(1, Ordering::SeqCst);
        self.store.hotels.insert(
            id,
            Hotel {
                id,
                name: name.to_string(),
                address: address.to_string(),
                phone: phone.to_string(),
                rooms: Vec::new(),
            },
        );
        id
    }

    pub fn add_room(
        &self,
        hotel_id: i32,
        room_type: RoomType,
        room_number: i32,
        price_per_night: f64,
        capacity: i32,
    ) -> i32 {
        let id = self.store.room_counter.fetch_add(1, Ordering::SeqCst);
        self.store.rooms.insert(
            id,
            Room {
                id,
                hotel_id,
                room_type,
                room_number,
                price_per_night,
                capacity,
                stays: Vec::new(),
            },
        );
        id
    }

    /// Attach a fixture stay directly to a room, bypassing booking flow
    pub fn add_stay(&self, room_id: i32, period: StayPeriod) -> i32 {
        let id = self.store.stay_counter.fetch_add(1, Ordering::SeqCst);
        self.store.room_stays.insert(
            id,
            RoomStay {
                id,
                booking_id: 0,
                room_id,
                period,
            },
        );
        id
    }

    pub fn booking_count(&self) -> usize {
        self.store.bookings.len()
    }

    pub fn room_stay_count(&self) -> usize {
        self.store.room_stays.len()
    }

    pub fn customer_count_for_email(&self, email: &str) -> usize {
        self.store
            .customers
            .iter()
            .filter(|entry| entry.email == email)
            .count()
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::NewRoomStay;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn booking_graph_round_trips() {
        let provider = InMemoryRepositoryProvider::new();
        let hotel_id = provider.add_hotel("Grand Plaza", "123 Main St", "+44 1234 56789123");
        let room_id = provider.add_room(hotel_id, RoomType::Double, 2, 155.0, 2);

        let booker = provider
            .customers()
            .insert(NewCustomer {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                address: String::new(),
                email: "jdoe@highdon.com".to_string(),
                phone: "+44 1294 567890".to_string(),
            })
            .await
            .unwrap();

        let period = StayPeriod::new(date(2026, 7, 1), date(2026, 7, 5));
        provider
            .bookings()
            .insert_booking(NewBooking {
                customer_id: booker.id,
                reference: "PrhEjxxuk1Bnp".to_string(),
                total_price: 775.0,
                stays: vec![NewRoomStay {
                    room_id,
                    period,
                    guest_ids: vec![booker.id],
                }],
            })
            .await
            .unwrap();

        assert!(provider
            .bookings()
            .reference_exists("PrhEjxxuk1Bnp")
            .await
            .unwrap());
        assert_eq!(
            provider.bookings().stays_for_room(room_id).await.unwrap(),
            vec![period]
        );

        let details = provider
            .bookings()
            .find_by_reference("PrhEjxxuk1Bnp")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(details.customer.email, "jdoe@highdon.com");
        assert_eq!(details.stays.len(), 1);
        assert_eq!(details.stays[0].hotel_name, "Grand Plaza");
        assert_eq!(details.stays[0].room_number, 2);
        assert_eq!(details.stays[0].guests.len(), 1);
    }

    #[tokio::test]
    async fn unknown_reference_misses() {
        let provider = InMemoryRepositoryProvider::new();
        assert!(provider
            .bookings()
            .find_by_reference("ZZZZZZZZ")
            .await
            .unwrap()
            .is_none());
        assert!(provider
            .bookings()
            .find_by_reference("")
            .await
            .unwrap()
            .is_none());
    }
}
