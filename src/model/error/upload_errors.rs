use std::fmt::{Display, Formatter};
use std::io;

use rocket::form::Errors;

/// everything that can go wrong between receiving an upload and having it on disk.
///
/// The HTTP layer doesn't distinguish these, they all become the same 422 with a different message
#[derive(Debug)]
pub enum UploadError {
    /// the multipart body couldn't be turned into an upload (missing `file` field, too large, bad encoding...)
    MalformedForm(String),
    /// the declared content type is missing or isn't an accepted image type
    InvalidMimeType(Option<String>),
    MissingFileName,
    /// only produced when file name sanitization is turned on
    UnsafeFileName(String),
    /// couldn't move the upload into the destination directory
    FailWriteDisk(io::Error),
}

impl UploadError {
    /// names each offending field, e.g. `` `file`: missing ``
    pub fn from_form_errors(errors: &Errors<'_>) -> UploadError {
        let reasons = errors
            .iter()
            .map(|error| match &error.name {
                Some(name) => format!("`{name}`: {}", error.kind),
                None => error.kind.to_string(),
            })
            .collect::<Vec<String>>();
        Self::MalformedForm(reasons.join(", "))
    }
}

impl Display for UploadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedForm(reason) => write!(f, "{reason}"),
            Self::InvalidMimeType(Some(declared)) => write!(f, "Invalid MIME type: {declared}"),
            Self::InvalidMimeType(None) => write!(f, "Invalid MIME type: none declared"),
            Self::MissingFileName => write!(f, "file name is required"),
            Self::UnsafeFileName(name) => write!(f, "file name `{name}` is not allowed"),
            Self::FailWriteDisk(e) => write!(f, "{e}"),
        }
    }
}
