pub mod upload_requests;
