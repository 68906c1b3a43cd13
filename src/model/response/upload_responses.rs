use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::error::upload_errors::UploadError;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct UploadSuccess {
    pub success: bool,
}

/// the one shape every failed upload comes back as
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "statusMessage")]
    pub status_message: String,
}

impl ErrorEnvelope {
    pub fn unprocessable(message: String) -> Json<ErrorEnvelope> {
        let status = Status::UnprocessableEntity;
        Json::from(ErrorEnvelope {
            message,
            status_code: status.code,
            status_message: status.reason_lossy().to_string(),
        })
    }
}

#[derive(Responder)]
pub enum UploadFileResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<UploadSuccess>),
    #[response(status = 422, content_type = "json")]
    Unprocessable(Json<ErrorEnvelope>),
}

impl UploadFileResponse {
    pub fn success() -> UploadFileResponse {
        Self::Success(Json::from(UploadSuccess { success: true }))
    }
}

impl From<UploadError> for UploadFileResponse {
    fn from(value: UploadError) -> Self {
        Self::Unprocessable(ErrorEnvelope::unprocessable(value.to_string()))
    }
}
