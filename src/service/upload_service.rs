use once_cell::sync::Lazy;
use regex::Regex;
use rocket::http::ContentType;

use crate::config::UploadConfig;
use crate::model::error::upload_errors::UploadError;
use crate::model::image_types::ImageType;
use crate::model::request::upload_requests::FileUpload;

/// anything that would make the name more than a single path component
//language=RegExp
static UNSAFE_FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.\.?$|[/\\\x00]").unwrap());

/// checks the client-declared content type against the accepted [`ImageType`]s
pub fn check_content_type(content_type: Option<&ContentType>) -> Result<ImageType, UploadError> {
    match content_type {
        Some(ct) => ImageType::from_content_type(ct)
            .ok_or_else(|| UploadError::InvalidMimeType(Some(ct.to_string()))),
        None => Err(UploadError::InvalidMimeType(None)),
    }
}

/// returns false if `name` could end up outside of the destination directory
pub fn is_safe_file_name(name: &str) -> bool {
    !UNSAFE_FILE_NAME.is_match(name)
}

/// `<destination>/<file_name>`. This is plain concatenation, so an absolute `file_name` still lands under `destination`
pub fn destination_path(destination: &str, file_name: &str) -> String {
    format!("{destination}/{file_name}")
}

/// validates the upload and moves it into the configured destination directory under the client's file name.
///
/// An existing file with the same name is overwritten. The destination directory is expected to exist already;
/// if it doesn't, that surfaces as [`UploadError::FailWriteDisk`]
pub async fn save_upload(
    upload: &mut FileUpload<'_>,
    config: &UploadConfig,
) -> Result<String, UploadError> {
    let image_type = check_content_type(upload.declared_content_type())?;
    let file_name = upload
        .original_file_name()
        .ok_or(UploadError::MissingFileName)?;
    if config.sanitize_file_names && !is_safe_file_name(&file_name) {
        return Err(UploadError::UnsafeFileName(file_name));
    }
    let path = destination_path(&config.destination, &file_name);
    upload
        .file
        .move_copy_to(&path)
        .await
        .map_err(UploadError::FailWriteDisk)?;
    log::info!("Saved {image_type} upload to {path}");
    Ok(path)
}
