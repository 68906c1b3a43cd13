use rocket::form::{Errors, Form};
use rocket::State;

use crate::config::UploadConfig;
use crate::model::error::upload_errors::UploadError;
use crate::model::request::upload_requests::FileUpload;
use crate::model::response::upload_responses::{ErrorEnvelope, UploadFileResponse};
use crate::service::upload_service::save_upload;

/// accepts a single image via the `file` multipart field and stores it off under its original name
#[post("/file", format = "multipart/form-data", data = "<upload>")]
pub async fn upload_file(
    upload: Result<Form<FileUpload<'_>>, Errors<'_>>,
    config: &State<UploadConfig>,
) -> UploadFileResponse {
    let result = match upload {
        Ok(form) => save_upload(&mut form.into_inner(), config).await,
        Err(errors) => Err(UploadError::from_form_errors(&errors)),
    };
    match result {
        Ok(_) => UploadFileResponse::success(),
        Err(e) => {
            match &e {
                UploadError::FailWriteDisk(io_err) => {
                    log::error!("Failed to write upload to disk: {io_err:?}")
                }
                _ => log::warn!("Rejected upload: {e}"),
            };
            UploadFileResponse::from(e)
        }
    }
}

/// anything posted to the upload route that isn't multipart still gets the usual error shape
#[post("/file", rank = 2)]
pub fn upload_file_not_multipart() -> UploadFileResponse {
    log::warn!("Rejected upload: request body was not multipart/form-data");
    UploadFileResponse::Unprocessable(ErrorEnvelope::unprocessable(
        "request body must be multipart/form-data".to_string(),
    ))
}
