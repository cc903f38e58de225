pub mod api;
pub mod auth;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
