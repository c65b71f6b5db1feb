use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, CustomerName};

/// Tenant owning a set of users. Read-only from this service's perspective.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    pub created_at: NaiveDateTime,
}
