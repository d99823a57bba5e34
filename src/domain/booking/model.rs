//! Booking domain entities
//!
//! A `Booking` owns one `RoomStay` per reserved room; each stay owns a
//! `StayGuest` per occupant. `StayPeriod` carries the interval logic the
//! whole reservation engine hangs on.

use chrono::NaiveDate;

use crate::domain::customer::Customer;

/// A room's occupation range. `end_date` is the last occupied night;
/// checkout happens the following morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl StayPeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Inclusive-endpoint overlap. A candidate starting on another stay's
    /// end date conflicts: checkout and check-in on the same calendar date
    /// are never back-to-back.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Nights occupied under the inclusive-night convention
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A committed booking
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i32,
    /// The booker, distinct from per-room guests
    pub customer_id: i32,
    /// Short public code, unique across all bookings
    pub reference: String,
    pub total_price: f64,
    pub cancelled: bool,
}

/// One reserved room under a booking
#[derive(Debug, Clone)]
pub struct RoomStay {
    pub id: i32,
    pub booking_id: i32,
    pub room_id: i32,
    pub period: StayPeriod,
}

/// One guest occupying a room stay
#[derive(Debug, Clone)]
pub struct StayGuest {
    pub id: i32,
    pub room_stay_id: i32,
    pub guest_id: i32,
}

/// Booking graph about to be persisted, committed as one unit
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_id: i32,
    pub reference: String,
    pub total_price: f64,
    pub stays: Vec<NewRoomStay>,
}

#[derive(Debug, Clone)]
pub struct NewRoomStay {
    pub room_id: i32,
    pub period: StayPeriod,
    /// Resolved guest customer IDs
    pub guest_ids: Vec<i32>,
}

/// Fully assembled booking as read back by reference
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub reference: String,
    pub customer: Customer,
    pub total_price: f64,
    pub cancelled: bool,
    pub stays: Vec<StayDetails>,
}

#[derive(Debug, Clone)]
pub struct StayDetails {
    pub hotel_name: String,
    pub room_number: i32,
    pub period: StayPeriod,
    pub guests: Vec<Customer>,
}

// ── Tests ──────────────────────────────────────────────────────
