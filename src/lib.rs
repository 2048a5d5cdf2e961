pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod params;
pub mod response;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
