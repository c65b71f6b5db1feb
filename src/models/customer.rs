//! Diesel models representing customers.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::types::{CustomerId, CustomerName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::try_from(customer.id)?,
            name: CustomerName::new(customer.name)?,
            created_at: customer.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_customer_name() {
        let db = Customer {
            id: 5,
            name: "  ".into(),
            created_at: NaiveDateTime::default(),
        };
        assert_eq!(
            DomainCustomer::try_from(db),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
