//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

use crate::domain::customer::{Customer, CustomerRepository, NewCustomer};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: customer::Model) -> Customer {
    Customer {
        id: m.id,
        first_name: m.first_name,
        last_name: m.last_name,
        address: m.address,
        email: m.email,
        phone: m.phone,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>> {
        // Email is not unique in storage; the earliest row wins
        let model = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .order_by_asc(customer::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn insert(&self, new: NewCustomer) -> DomainResult<Customer> {
        debug!(email = %new.email, "Creating customer");

        let model = customer::ActiveModel {
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            address: Set(new.address),
            email: Set(new.email),
            phone: Set(new.phone),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }
}
