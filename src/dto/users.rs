//! DTOs exposed by the customer users endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::domain::types::{CustomerId, UserFilter, UserId};
use crate::domain::user::{User, UserAddress};
use crate::pagination::Paginated;

/// Query parameters accepted by `GET /api/customers/{id}/users`.
///
/// `page` stays textual so malformed values fall back to the first page
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQueryParams {
    pub page: Option<String>,
    /// Matched against the slug or email of the users.
    pub filter: Option<String>,
}

/// Path of a customer's user collection.
pub fn users_path(customer_id: CustomerId) -> String {
    format!("/api/customers/{customer_id}/users")
}

/// Path of a single user resource.
pub fn user_path(customer_id: CustomerId, user_id: UserId) -> String {
    format!("{}/{user_id}", users_path(customer_id))
}

#[derive(Serialize)]
struct LinkQuery<'a> {
    page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
}

fn page_link(base: &str, page: usize, filter: Option<&UserFilter>) -> String {
    let query = LinkQuery {
        page,
        filter: filter.map(UserFilter::as_str),
    };
    match serde_html_form::to_string(&query) {
        Ok(query) => format!("{base}?{query}"),
        Err(err) => {
            log::warn!("Failed to encode page link query: {err}");
            format!("{base}?page={page}")
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub current: String,
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub current: String,
    pub delete: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AddressView {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl From<UserAddress> for AddressView {
    fn from(address: UserAddress) -> Self {
        Self {
            street: address.street,
            postal_code: address.postal_code,
            city: address.city,
            country: address.country,
        }
    }
}

/// One entry of the user list.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserView {
    pub id: i32,
    pub slug: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub addresses: Vec<AddressView>,
    pub links: UserLinks,
}

impl UserView {
    pub fn new(user: User, addresses: Vec<UserAddress>) -> Self {
        let path = user_path(user.customer_id, user.id);
        Self {
            id: user.id.get(),
            slug: user.slug.into_inner(),
            email: user.email.into_inner(),
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            addresses: addresses.into_iter().map(AddressView::from).collect(),
            links: UserLinks {
                current: path.clone(),
                delete: path,
            },
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CustomerView {
    pub id: i32,
    pub name: String,
}

/// Body of a successful user listing.
#[derive(Debug, Serialize)]
pub struct UsersPage {
    pub customer: CustomerView,
    #[serde(flatten)]
    pub list: Paginated<UserView>,
    pub links: PageLinks,
}

impl UsersPage {
    pub fn new(
        customer: &Customer,
        users: Paginated<(User, Vec<UserAddress>)>,
        filter: Option<&UserFilter>,
    ) -> Self {
        let base = users_path(customer.id);
        let link = |page: usize| page_link(&base, page, filter);

        let list = users.map(|(user, addresses)| UserView::new(user, addresses));
        let links = PageLinks {
            current: link(list.page),
            first: link(1),
            last: link(list.pages.max(1)),
            prev: list.has_prev().then(|| link(list.page - 1)),
            next: list.has_next().then(|| link(list.page + 1)),
        };

        Self {
            customer: CustomerView {
                id: customer.id.get(),
                name: customer.name.as_str().to_string(),
            },
            list,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CustomerName, UserEmail, UserSlug};
    use crate::pagination::{PageCheck, check_page};

    fn customer() -> Customer {
        Customer {
            id: CustomerId::new(5).expect("valid customer id"),
            name: CustomerName::new("Acme").expect("valid name"),
            created_at: NaiveDateTime::default(),
        }
    }

    fn user(id: i32) -> User {
        User {
            id: UserId::new(id).expect("valid user id"),
            customer_id: CustomerId::new(5).expect("valid customer id"),
            slug: UserSlug::new(format!("user-{id}")).expect("valid slug"),
            email: UserEmail::new(format!("user{id}@example.com")).expect("valid email"),
            first_name: None,
            last_name: None,
            created_at: NaiveDateTime::default(),
        }
    }

    fn page(raw: &str, total: usize) -> crate::pagination::Page {
        match check_page(Some(raw), total, 10) {
            PageCheck::Valid(page) => page,
            PageCheck::NotFound(_) => panic!("page {raw} should exist"),
        }
    }

    #[test]
    fn middle_page_links_both_ways() {
        let items = vec![(user(11), vec![])];
        let paginated = Paginated::new(items, page("2", 25), 25, 10);

        let body = UsersPage::new(&customer(), paginated, None);

        assert_eq!(body.links.current, "/api/customers/5/users?page=2");
        assert_eq!(body.links.first, "/api/customers/5/users?page=1");
        assert_eq!(body.links.last, "/api/customers/5/users?page=3");
        assert_eq!(
            body.links.prev.as_deref(),
            Some("/api/customers/5/users?page=1")
        );
        assert_eq!(
            body.links.next.as_deref(),
            Some("/api/customers/5/users?page=3")
        );
        assert_eq!(body.list.items[0].links.delete, "/api/customers/5/users/11");
    }

    #[test]
    fn links_keep_the_filter() {
        let filter = UserFilter::new("bob smith").expect("valid filter");
        let paginated = Paginated::new(vec![(user(1), vec![])], page("1", 1), 1, 10);

        let body = UsersPage::new(&customer(), paginated, Some(&filter));

        assert_eq!(
            body.links.current,
            "/api/customers/5/users?page=1&filter=bob+smith"
        );
        assert!(body.links.prev.is_none());
        assert!(body.links.next.is_none());
    }

    #[test]
    fn empty_listing_serializes_with_metadata() {
        let paginated = Paginated::new(Vec::new(), page("1", 0), 0, 10);

        let body = UsersPage::new(&customer(), paginated, None);
        let json = serde_json::to_value(&body).expect("serializable");

        assert_eq!(json["customer"]["id"], 5);
        assert_eq!(json["page"], 1);
        assert_eq!(json["pages"], 0);
        assert_eq!(json["total"], 0);
        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["links"]["last"], "/api/customers/5/users?page=1");
    }
}
