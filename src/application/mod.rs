pub mod clock;
pub mod reference;
pub mod room_lock;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use reference::ReferenceGenerator;
pub use room_lock::RoomLockRegistry;
pub use services::{BookingService, HotelService, RoomStayService};
