pub mod api_responses;
pub mod upload_responses;
