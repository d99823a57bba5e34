//! SeaORM-backed repository implementations

pub mod booking_repository;
pub mod customer_repository;
pub mod hotel_repository;
pub mod repository_provider;

pub use booking_repository::SeaOrmBookingRepository;
pub use customer_repository::SeaOrmCustomerRepository;
pub use hotel_repository::SeaOrmHotelRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
