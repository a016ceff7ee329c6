mod helpers;
mod keystone_service;
mod tracing;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use keystone_service::KeystoneService;
