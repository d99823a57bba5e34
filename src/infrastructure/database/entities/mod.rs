//! SeaORM entities

pub mod booking;
pub mod customer;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod room_stay;
pub mod stay_guest;
