use rocket::fs::TempFile;
use rocket::http::ContentType;

#[derive(FromForm)]
pub struct FileUpload<'r> {
    /// the image being uploaded. Content type and file name both come from the part's headers
    pub file: TempFile<'r>,
}

impl FileUpload<'_> {
    /// the file name exactly as the client sent it, path separators and all.
    /// Rocket's [`FileName::as_str`](rocket::fs::FileName::as_str) would strip the extension, which we need to keep
    pub fn original_file_name(&self) -> Option<String> {
        self.file
            .raw_name()
            .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string())
            .filter(|name| !name.is_empty())
    }

    pub fn declared_content_type(&self) -> Option<&ContentType> {
        self.file.content_type()
    }
}
