//! Diesel models representing users and their addresses.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{
    CustomerId, TypeConstraintError, UserAddressId, UserEmail, UserId, UserSlug,
};
use crate::domain::user::{User as DomainUser, UserAddress as DomainUserAddress};
use crate::models::customer::Customer;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: i32,
    pub customer_id: i32,
    pub slug: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub customer_id: i32,
    pub slug: &'a str,
    pub email: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(table_name = crate::schema::user_addresses)]
/// Diesel model for [`crate::domain::user::UserAddress`].
pub struct UserAddress {
    pub id: i32,
    pub user_id: i32,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_addresses)]
/// Insertable form of [`UserAddress`].
pub struct NewUserAddress<'a> {
    pub user_id: i32,
    pub street: &'a str,
    pub postal_code: &'a str,
    pub city: &'a str,
    pub country: &'a str,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::try_from(user.id)?,
            customer_id: CustomerId::try_from(user.customer_id)?,
            slug: UserSlug::new(user.slug)?,
            email: UserEmail::new(user.email)?,
            first_name: user.first_name.filter(|s| !s.trim().is_empty()),
            last_name: user.last_name.filter(|s| !s.trim().is_empty()),
            created_at: user.created_at,
        })
    }
}

impl TryFrom<UserAddress> for DomainUserAddress {
    type Error = TypeConstraintError;

    fn try_from(address: UserAddress) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserAddressId::try_from(address.id)?,
            user_id: UserId::try_from(address.user_id)?,
            street: address.street,
            postal_code: address.postal_code,
            city: address.city,
            country: address.country,
        })
    }
}
