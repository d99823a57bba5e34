pub mod booking;
pub mod customer;
pub mod error;
pub mod hotel;
pub mod repositories;

// Re-export commonly used types
pub use booking::{
    Booking, BookingDetails, NewBooking, NewRoomStay, RoomStay, StayDetails, StayGuest, StayPeriod,
};
pub use customer::{Customer, NewCustomer};
pub use error::{DomainError, DomainResult};
pub use hotel::{Hotel, Room, RoomType};
pub use repositories::RepositoryProvider;
