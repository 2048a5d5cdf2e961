pub mod auth;
pub mod medications;
pub mod orders;
pub mod profile;
