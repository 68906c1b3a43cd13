pub mod api_handler;
pub mod upload_handler;
