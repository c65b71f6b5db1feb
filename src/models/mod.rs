//! Database models shared across the repository layer.

pub mod config;
pub mod customer;
pub mod user;
