pub mod upload_errors;
