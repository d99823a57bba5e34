//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to the per-aggregate
//! repositories; consumers request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let hotel = repos.hotels().find_first_by_name("Grand Plaza").await?;
//!     let stays = repos.bookings().stays_for_room(room.id).await?;
//! }
//! ```

use super::booking::BookingRepository;
use super::customer::CustomerRepository;
use super::hotel::HotelRepository;

/// Provides access to all domain repositories.
pub trait RepositoryProvider: Send + Sync {
    fn hotels(&self) -> &dyn HotelRepository;
    fn customers(&self) -> &dyn CustomerRepository;
    fn bookings(&self) -> &dyn BookingRepository;
}
