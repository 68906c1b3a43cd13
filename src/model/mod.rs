pub mod error;
pub mod image_types;
pub mod request;
pub mod response;
