pub mod auth_service;
pub mod dashboard_service;
pub mod medication_service;
pub mod notification_service;
pub mod order_service;
pub mod profile_service;
