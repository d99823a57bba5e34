//! Hotel and room domain entities

use crate::domain::booking::StayPeriod;

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Suite => "Suite",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Single" => Self::Single,
            "Double" => Self::Double,
            "Suite" => Self::Suite,
            _ => Self::Single,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bookable room belonging to a hotel
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique room ID
    pub id: i32,
    /// Owning hotel ID
    pub hotel_id: i32,
    pub room_type: RoomType,
    /// Room number, unique within a hotel
    pub room_number: i32,
    pub price_per_night: f64,
    /// Maximum number of guests
    pub capacity: i32,
    /// Existing stays on this room, when loaded by the repository
    pub stays: Vec<StayPeriod>,
}

/// Hotel with its rooms
#[derive(Debug, Clone)]
pub struct Hotel {
    pub id: i32,
    /// Hotel name; used as the lookup key by availability and booking
    pub name: String,
    pub address: String,
    pub phone: String,
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// Sum of capacities over the currently held room list
    pub fn total_capacity(&self) -> i32 {
        self.rooms.iter().map(|r| r.capacity).sum()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_roundtrip() {
        for room_type in &[RoomType::Single, RoomType::Double, RoomType::Suite] {
            let s = room_type.as_str();
            assert_eq!(&RoomType::from_str(s), room_type);
        }
    }

    #[test]
    fn unknown_room_type_defaults_to_single() {
        assert_eq!(RoomType::from_str("Penthouse"), RoomType::Single);
    }

    #[test]
    fn total_capacity_sums_rooms() {
        let hotel = Hotel {
            id: 1,
            name: "Grand Plaza".to_string(),
            address: "123 Main St".to_string(),
            phone: "+44 1234 56789123".to_string(),
            rooms: vec![
                Room {
                    id: 1,
                    hotel_id: 1,
                    room_type: RoomType::Single,
                    room_number: 1,
                    price_per_night: 75.0,
                    capacity: 1,
                    stays: Vec::new(),
                },
                Room {
                    id: 2,
                    hotel_id: 1,
                    room_type: RoomType::Double,
                    room_number: 2,
                    price_per_night: 155.0,
                    capacity: 2,
                    stays: Vec::new(),
                },
            ],
        };
        assert_eq!(hotel.total_capacity(), 3);
    }
}
