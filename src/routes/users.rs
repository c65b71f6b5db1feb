//! Handlers for the customer users API.
//!
//! Path ids are taken as text and parsed by the services, so ids that do not
//! fit an `i32` follow the same rules as non-positive ones.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, web};

use crate::dto::users::UsersQueryParams;
use crate::pagination::NotFoundPayload;
use crate::repository::DieselRepository;
use crate::routes::respond;
use crate::services::{ServiceError, users as users_service};

const CUSTOMER_NOT_FOUND_MESSAGE: &str = "Client introuvable !";

#[get("/customers/{customer_id}/users")]
pub async fn show_users(
    customer_id: web::Path<String>,
    params: web::Query<UsersQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::list_users(repo.get_ref(), &customer_id, params.into_inner()) {
        Ok(page) => respond(Some(&page), StatusCode::OK),
        Err(ServiceError::PageNotFound(payload)) => {
            respond(Some(&payload), StatusCode::NOT_FOUND)
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => respond(
            Some(&NotFoundPayload::new(CUSTOMER_NOT_FOUND_MESSAGE)),
            StatusCode::NOT_FOUND,
        ),
        Err(err) => {
            log::error!("Failed to list users: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/customers/{customer_id}/users/{user_id}")]
pub async fn delete_user(
    path: web::Path<(String, String)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (customer_id, user_id) = path.into_inner();

    match users_service::delete_user(repo.get_ref(), &customer_id, &user_id) {
        Ok(()) => respond::<()>(None, StatusCode::NO_CONTENT),
        Err(err) => {
            log::error!("Failed to delete user {user_id} of customer {customer_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
