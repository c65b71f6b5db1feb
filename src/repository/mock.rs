//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::Customer;
use crate::domain::types::{CustomerId, UserId};
use crate::domain::user::{User, UserAddress};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, UserListQuery, UserReader, UserWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(
            &self,
            id: UserId,
            customer_id: CustomerId,
        ) -> RepositoryResult<Option<User>>;
        fn count_users(&self, query: &UserListQuery) -> RepositoryResult<usize>;
        fn list_users(
            &self,
            query: &UserListQuery,
        ) -> RepositoryResult<Vec<(User, Vec<UserAddress>)>>;
    }

    impl UserWriter for Repository {
        fn delete_user(&self, user_id: UserId) -> RepositoryResult<()>;
    }
}
