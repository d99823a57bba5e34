//! Development seed data
//!
//! Populates an empty database with a small catalog of hotels, rooms,
//! customers and sample bookings for local development.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use super::entities::{booking, customer, hotel, room, room_stay, stay_guest};

/// Seed the catalog if no hotels exist yet. Safe to call on every start.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<(), DbErr> {
    let hotel_count = hotel::Entity::find().count(db).await?;
    if hotel_count > 0 {
        return Ok(());
    }

    info!("Seeding development data...");

    let hotels = [
        ("Grand Plaza", "123 Main St, Cityville", "+44 1234 56789123"),
        ("Mardon Villa", "28 High St, Redtown", "+44 1417 9258465"),
        ("Hilton Heights", "425 Main Rd, Bluefield", "+44 1187 62549785"),
    ];
    let mut hotel_ids = Vec::new();
    for (name, address, phone) in hotels {
        let inserted = hotel::ActiveModel {
            name: Set(name.to_string()),
            address: Set(address.to_string()),
            phone: Set(phone.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        hotel_ids.push(inserted.id);
    }

    // (hotel index, room type, room number, price per night, capacity)
    let rooms = [
        (0, "Single", 1, 75.0, 1),
        (0, "Double", 2, 155.0, 2),
        (0, "Double", 3, 150.0, 2),
        (0, "Suite", 4, 175.0, 2),
        (0, "Double", 5, 150.0, 2),
        (0, "Suite", 6, 175.0, 2),
        (1, "Single", 1, 75.0, 1),
        (1, "Single", 2, 75.0, 1),
        (1, "Double", 3, 250.0, 2),
        (1, "Single", 4, 75.0, 1),
        (1, "Double", 5, 250.0, 2),
        (1, "Double", 6, 250.0, 2),
        (2, "Suite", 1, 250.0, 2),
        (2, "Single", 2, 175.0, 1),
        (2, "Suite", 3, 275.0, 2),
        (2, "Suite", 4, 275.0, 2),
        (2, "Suite", 5, 275.0, 2),
        (2, "Suite", 6, 275.0, 2),
    ];
    let mut room_ids = Vec::new();
    for (hotel_idx, room_type, number, price, capacity) in rooms {
        let inserted = room::ActiveModel {
            hotel_id: Set(hotel_ids[hotel_idx]),
            room_type: Set(room_type.to_string()),
            room_number: Set(number),
            price_per_night: Set(price),
            capacity: Set(capacity),
            ..Default::default()
        }
        .insert(db)
        .await?;
        room_ids.push(inserted.id);
    }

    let customers = [
        ("John", "Doe", "456 Elm St, Townsville", "jdoe@highdon.com", "+44 1294 567890"),
        ("Hayley", "Tilsley", "9 random Way, Middlebridge", "htilsley@outlook.co.uk", "+44 1934 3451915"),
        ("Rachel", "Piemaker", "45 Least Road, Kettleborough", "rpiemaker@gmail.com", "+44 1454 9427584"),
        ("Paul", "Pope", "91 Rude Avenue, Greatley", "ppope@futuremail.co.uk", "+44 1917 2365548"),
        ("Jane", "Carter", "75 Bell View, Hartlingshine", "jcarter@gmail.com", "+44 1652 354584"),
    ];
    let mut customer_ids = Vec::new();
    for (first, last, address, email, phone) in customers {
        let inserted = customer::ActiveModel {
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            address: Set(address.to_string()),
            email: Set(email.to_string()),
            phone: Set(phone.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        customer_ids.push(inserted.id);
    }

    // (customer index, reference, total price)
    let bookings = [
        (0, "PrhEjxxuk1Bnp", 475.0),
        (1, "Z26UtejKnmWtA", 280.0),
        (2, "XR1NHc5U9Fl74", 1450.0),
    ];
    let mut booking_ids = Vec::new();
    for (customer_idx, reference, total) in bookings {
        let inserted = booking::ActiveModel {
            customer_id: Set(customer_ids[customer_idx]),
            reference: Set(reference.to_string()),
            total_price: Set(total),
            cancelled: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await?;
        booking_ids.push(inserted.id);
    }

    // (booking index, room index, start, end)
    let stays = [
        (0, 1, (2026, 7, 1), (2026, 7, 5)),
        (1, 2, (2026, 8, 10), (2026, 8, 15)),
        (2, 3, (2026, 9, 20), (2026, 9, 25)),
        (0, 2, (2026, 7, 1), (2026, 7, 5)),
        (1, 3, (2026, 8, 10), (2026, 8, 15)),
        (2, 4, (2026, 9, 20), (2026, 9, 25)),
    ];
    let mut stay_ids = Vec::new();
    for (booking_idx, room_idx, start, end) in stays {
        let inserted = room_stay::ActiveModel {
            booking_id: Set(booking_ids[booking_idx]),
            room_id: Set(room_ids[room_idx]),
            start_date: Set(seed_date(start)),
            end_date: Set(seed_date(end)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        stay_ids.push(inserted.id);
    }

    // (stay index, guest customer index)
    let guests = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 0)];
    for (stay_idx, customer_idx) in guests {
        stay_guest::ActiveModel {
            room_stay_id: Set(stay_ids[stay_idx]),
            guest_id: Set(customer_ids[customer_idx]),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!(
        hotels = hotel_ids.len(),
        rooms = room_ids.len(),
        customers = customer_ids.len(),
        bookings = booking_ids.len(),
        "Development data seeded"
    );
    Ok(())
}

fn seed_date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
