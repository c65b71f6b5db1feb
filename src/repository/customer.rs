//! Repository implementation for customers.

use diesel::prelude::*;

use crate::{
    domain::{customer::Customer, types::CustomerId},
    models::customer::Customer as DbCustomer,
    repository::{
        CustomerReader, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_customer = customers::table
            .find(id.get())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        db_customer
            .map(Customer::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}
