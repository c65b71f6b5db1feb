use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        customer::Customer,
        types::{CustomerId, UserFilter, UserId},
        user::{User, UserAddress},
    },
    pagination::Page,
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod user;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: Page,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        self.page.offset(self.per_page)
    }
}

/// Selection of a customer's users, optionally filtered and paginated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    pub customer_id: CustomerId,
    pub filter: Option<UserFilter>,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            filter: None,
            pagination: None,
        }
    }

    pub fn filter(mut self, filter: Option<UserFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn paginate(mut self, page: Page, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
}

pub trait UserReader {
    /// Looks a user up by id within a single customer.
    fn get_user_by_id(&self, id: UserId, customer_id: CustomerId)
    -> RepositoryResult<Option<User>>;
    /// Counts the users matching the query, ignoring its pagination.
    fn count_users(&self, query: &UserListQuery) -> RepositoryResult<usize>;
    /// Lists the matching users ordered by id, each with its addresses.
    fn list_users(&self, query: &UserListQuery)
    -> RepositoryResult<Vec<(User, Vec<UserAddress>)>>;
}

pub trait UserWriter {
    /// Removes the user and everything it owns.
    fn delete_user(&self, user_id: UserId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
