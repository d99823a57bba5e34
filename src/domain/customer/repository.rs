//! Customer repository interface

use async_trait::async_trait;

use super::model::{Customer, NewCustomer};
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// First customer with this exact email, if any
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>>;

    /// Persist a new customer and return it with its generated ID
    async fn insert(&self, customer: NewCustomer) -> DomainResult<Customer>;
}
