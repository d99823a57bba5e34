//! Room availability check

use crate::domain::hotel::Room;
use crate::domain::{DomainResult, StayPeriod};

/// Decides whether a room is already booked over a candidate period.
///
/// The check itself is pure over the room's loaded stays; the fallible
/// signature is the seam availability aggregation uses to degrade
/// per room instead of aborting a whole query.
pub struct RoomStayService;

impl RoomStayService {
    pub fn new() -> Self {
        Self
    }

    /// True iff any existing stay on the room overlaps the period.
    /// A room with no stays is free.
    pub async fn room_booked(&self, room: &Room, period: &StayPeriod) -> DomainResult<bool> {
        Ok(room.stays.iter().any(|stay| stay.overlaps(period)))
    }
}

impl Default for RoomStayService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::hotel::RoomType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room_with_stays(stays: Vec<StayPeriod>) -> Room {
        Room {
            id: 1,
            hotel_id: 1,
            room_type: RoomType::Double,
            room_number: 2,
            price_per_night: 155.0,
            capacity: 2,
            stays,
        }
    }

    #[tokio::test]
    async fn room_without_stays_is_free() {
        let service = RoomStayService::new();
        let room = room_with_stays(Vec::new());
        let period = StayPeriod::new(date(2026, 7, 1), date(2026, 7, 5));
        assert!(!service.room_booked(&room, &period).await.unwrap());
    }

    #[tokio::test]
    async fn gap_separated_period_is_free() {
        let service = RoomStayService::new();
        let room = room_with_stays(vec![StayPeriod::new(date(2026, 7, 1), date(2026, 7, 5))]);
        let period = StayPeriod::new(date(2026, 7, 7), date(2026, 7, 9));
        assert!(!service.room_booked(&room, &period).await.unwrap());
    }

    #[tokio::test]
    async fn boundary_sharing_period_is_booked() {
        let service = RoomStayService::new();
        let room = room_with_stays(vec![StayPeriod::new(date(2026, 7, 2), date(2026, 7, 4))]);
        let period = StayPeriod::new(date(2026, 7, 4), date(2026, 7, 6));
        assert!(service.room_booked(&room, &period).await.unwrap());
    }

    #[tokio::test]
    async fn any_of_several_stays_conflicts() {
        let service = RoomStayService::new();
        let room = room_with_stays(vec![
            StayPeriod::new(date(2026, 7, 1), date(2026, 7, 3)),
            StayPeriod::new(date(2026, 8, 10), date(2026, 8, 15)),
        ]);
        let period = StayPeriod::new(date(2026, 8, 14), date(2026, 8, 20));
        assert!(service.room_booked(&room, &period).await.unwrap());
    }
}
