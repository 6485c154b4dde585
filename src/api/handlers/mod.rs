//! HTTP request handlers.

pub mod password_handler;

pub use password_handler::admin_routes;
