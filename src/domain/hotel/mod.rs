pub mod model;
pub mod repository;

pub use model::{Hotel, Room, RoomType};
pub use repository::HotelRepository;
