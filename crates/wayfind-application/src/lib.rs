//! Application layer for Wayfind.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers: the auth flow (login, register,
//! logout, session restore) and the map-search flow (location resolution,
//! radius-bounded nearby search).

pub mod auth_usecase;
pub mod search_usecase;

pub use auth_usecase::AuthUseCase;
pub use search_usecase::{MapSearchUseCase, SearchState};
