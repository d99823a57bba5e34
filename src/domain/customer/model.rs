//! Customer domain entity

/// A stored customer. Created lazily on first appearance of an email
/// and never mutated by booking flows afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// De-facto natural key for deduplication
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields for a customer row about to be created
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_first_and_last() {
        let customer = Customer {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "456 Elm St, Townsville".to_string(),
            email: "jdoe@highdon.com".to_string(),
            phone: "+44 1294 567890".to_string(),
        };
        assert_eq!(customer.display_name(), "John Doe");
    }
}
