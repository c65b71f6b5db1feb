//! Repository implementation for customer users.

use diesel::sqlite::Sqlite;
use diesel::{Connection, prelude::*};

use crate::{
    db::unicode_lower,
    domain::{
        types::{CustomerId, TypeConstraintError, UserFilter, UserId},
        user::{User, UserAddress},
    },
    models::user::{User as DbUser, UserAddress as DbUserAddress},
    repository::{
        DieselRepository, UserListQuery, UserReader, UserWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{user_addresses, users},
};

/// Builds a lowercased `LIKE` pattern matching `filter` anywhere in a column,
/// with the wildcard characters of the filter itself escaped by `\`.
fn like_pattern(filter: &UserFilter) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for ch in filter.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Users of the query's customer matching its filter. Both columns go through
/// [`unicode_lower`] so accented capitals fold like ASCII ones.
fn filtered_users(query: &UserListQuery) -> users::BoxedQuery<'static, Sqlite> {
    let mut items = users::table
        .filter(users::customer_id.eq(query.customer_id.get()))
        .into_boxed();

    if let Some(filter) = &query.filter {
        let pattern = like_pattern(filter);
        items = items.filter(
            unicode_lower(users::slug)
                .like(pattern.clone())
                .escape('\\')
                .or(unicode_lower(users::email).like(pattern).escape('\\')),
        );
    }

    items
}

impl UserReader for DieselRepository {
    fn get_user_by_id(
        &self,
        id: UserId,
        customer_id: CustomerId,
    ) -> RepositoryResult<Option<User>> {
        let mut conn = self.conn()?;
        let db_user = users::table
            .filter(users::id.eq(id.get()))
            .filter(users::customer_id.eq(customer_id.get()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        db_user
            .map(User::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn count_users(&self, query: &UserListQuery) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total = filtered_users(query)
            .count()
            .get_result::<i64>(&mut conn)?;

        usize::try_from(total)
            .map_err(|_| RepositoryError::Unexpected(format!("negative row count {total}")))
    }

    fn list_users(
        &self,
        query: &UserListQuery,
    ) -> RepositoryResult<Vec<(User, Vec<UserAddress>)>> {
        let mut conn = self.conn()?;

        let mut items = filtered_users(query).order(users::id.asc());
        if let Some(pagination) = &query.pagination {
            items = items
                .offset(to_sql_int(pagination.offset()))
                .limit(to_sql_int(pagination.per_page));
        }

        let db_users = items.load::<DbUser>(&mut conn)?;

        let db_addresses = DbUserAddress::belonging_to(&db_users)
            .order(user_addresses::id.asc())
            .load::<DbUserAddress>(&mut conn)?;
        let addresses_by_user = db_addresses.grouped_by(&db_users);

        db_users
            .into_iter()
            .zip(addresses_by_user)
            .map(|(db_user, db_addresses)| -> Result<_, TypeConstraintError> {
                let user = User::try_from(db_user)?;
                let addresses = db_addresses
                    .into_iter()
                    .map(UserAddress::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((user, addresses))
            })
            .collect::<Result<Vec<_>, TypeConstraintError>>()
            .map_err(RepositoryError::from)
    }
}

impl UserWriter for DieselRepository {
    fn delete_user(&self, user_id: UserId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(user_addresses::table.filter(user_addresses::user_id.eq(user_id.get())))
                .execute(conn)?;
            diesel::delete(users::table.find(user_id.get())).execute(conn)?;
            Ok(())
        })
        .map_err(RepositoryError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        let filter = UserFilter::new("50%_off\\").expect("valid filter");
        assert_eq!(like_pattern(&filter), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn like_pattern_wraps_lowercased_text() {
        let filter = UserFilter::new("BOB").expect("valid filter");
        assert_eq!(like_pattern(&filter), "%bob%");
    }

    #[test]
    fn like_pattern_lowercases_accented_capitals() {
        let filter = UserFilter::new("ÉLODIE").expect("valid filter");
        assert_eq!(like_pattern(&filter), "%élodie%");
    }
}
