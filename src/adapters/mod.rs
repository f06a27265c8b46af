pub mod auth;
pub mod drive_hub;
pub mod http_client;
pub mod sheets_hub;
