use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, UserAddressId, UserEmail, UserId, UserSlug};

/// Number of users returned per listing page.
pub const LIMIT_PER_PAGE: usize = 10;

/// A user always belongs to exactly one customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub customer_id: CustomerId,
    pub slug: UserSlug,
    pub email: UserEmail,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserAddress {
    pub id: UserAddressId,
    pub user_id: UserId,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}
