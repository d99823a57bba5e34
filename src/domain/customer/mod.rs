pub mod model;
pub mod repository;

pub use model::{Customer, NewCustomer};
pub use repository::CustomerRepository;
