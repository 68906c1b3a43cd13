use std::fmt::{Display, Formatter};

use rocket::http::ContentType;

/// the only kinds of files the upload endpoint will store
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum ImageType {
    Png,
    Jpeg,
    Gif,
}

impl ImageType {
    /// maps the content type the client _says_ the file is. The bytes themselves are never looked at.
    ///
    /// `top/sub` are compared case-insensitively and parameters are ignored, so `image/PNG; q=1` is still [`ImageType::Png`]
    pub fn from_content_type(content_type: &ContentType) -> Option<ImageType> {
        let top = content_type.top().as_str().to_ascii_lowercase();
        let sub = content_type.sub().as_str().to_ascii_lowercase();
        match (top.as_str(), sub.as_str()) {
            ("image", "png") => Some(Self::Png),
            ("image", "jpeg") => Some(Self::Jpeg),
            ("image", "gif") => Some(Self::Gif),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }
}

impl Display for ImageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}
