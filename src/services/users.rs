//! Services backing the customer users API.

use crate::domain::types::{CustomerId, UserFilter, UserId};
use crate::domain::user::LIMIT_PER_PAGE;
use crate::dto::users::{UsersPage, UsersQueryParams};
use crate::pagination::{PageCheck, Paginated, check_page};
use crate::repository::{CustomerReader, UserListQuery, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of the customer's users, optionally filtered by slug or
/// email.
///
/// `customer_id` is the raw path segment; text that is not a positive id
/// yields [`ServiceError::TypeConstraint`].
///
/// The page number is checked against the filtered result set before the page
/// itself is loaded; an out-of-range page yields
/// [`ServiceError::PageNotFound`] without querying the users.
pub fn list_users<R>(
    repo: &R,
    customer_id: &str,
    params: UsersQueryParams,
) -> ServiceResult<UsersPage>
where
    R: CustomerReader + UserReader + ?Sized,
{
    let customer_id: CustomerId = customer_id.parse()?;
    let customer = repo
        .get_customer_by_id(customer_id)?
        .ok_or(ServiceError::NotFound)?;

    let filter = UserFilter::from_query(params.filter.as_deref());
    let query = UserListQuery::new(customer.id).filter(filter.clone());

    let total = repo.count_users(&query)?;

    let page = match check_page(params.page.as_deref(), total, LIMIT_PER_PAGE) {
        PageCheck::Valid(page) => page,
        PageCheck::NotFound(payload) => return Err(ServiceError::PageNotFound(payload)),
    };

    let users = repo.list_users(&query.paginate(page, LIMIT_PER_PAGE))?;

    Ok(UsersPage::new(
        &customer,
        Paginated::new(users, page, total, LIMIT_PER_PAGE),
        filter.as_ref(),
    ))
}

/// Deletes the user if it belongs to the customer. Missing users, users of
/// other customers and identifiers that do not parse as positive ids are all
/// a silent success.
pub fn delete_user<R>(repo: &R, customer_id: &str, user_id: &str) -> ServiceResult<()>
where
    R: UserReader + UserWriter + ?Sized,
{
    let (Ok(customer_id), Ok(user_id)) = (
        customer_id.parse::<CustomerId>(),
        user_id.parse::<UserId>(),
    ) else {
        log::debug!("Ignoring delete of user {user_id:?} for customer {customer_id:?}: invalid id");
        return Ok(());
    };

    match repo.get_user_by_id(user_id, customer_id)? {
        Some(user) => {
            repo.delete_user(user.id)?;
            log::info!("Deleted user {} of customer {}", user.id, customer_id);
        }
        None => {
            log::debug!("No user {user_id} for customer {customer_id}, nothing to delete");
        }
    }

    Ok(())
}
