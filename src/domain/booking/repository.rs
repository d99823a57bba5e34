//! Booking repository interfaces

use async_trait::async_trait;

use super::model::{Booking, BookingDetails, NewBooking, StayPeriod};
use crate::domain::DomainResult;

/// Uniqueness check the reference generator retries against.
///
/// Split out of `BookingRepository` so the generator can be exercised
/// against a stub without standing up full booking storage.
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Whether any stored booking already carries this exact reference
    async fn reference_exists(&self, reference: &str) -> DomainResult<bool>;
}

#[async_trait]
pub trait BookingRepository: ReferenceStore {
    /// Current stays on a room, freshly read from storage
    async fn stays_for_room(&self, room_id: i32) -> DomainResult<Vec<StayPeriod>>;

    /// Persist the booking with its stays and guest links as one
    /// transaction: either every row commits or none do.
    async fn insert_booking(&self, booking: NewBooking) -> DomainResult<Booking>;

    /// Booking graph by reference: customer, stays with hotel/room names,
    /// and per-stay guests. Empty or unknown references return `None`.
    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<BookingDetails>>;
}
