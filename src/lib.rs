pub mod api;
pub mod app;
pub mod board;
pub mod config;
pub mod dtos;
pub mod error;
pub mod models;
pub mod notify;
pub mod roster;
pub mod session;
