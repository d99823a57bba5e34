pub mod model;
pub mod repository;

pub use model::{
    Booking, BookingDetails, NewBooking, NewRoomStay, RoomStay, StayDetails, StayGuest, StayPeriod,
};
pub use repository::{BookingRepository, ReferenceStore};
