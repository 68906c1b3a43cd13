use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    pub version: String,
}

impl ApiVersion {
    pub fn current() -> ApiVersion {
        ApiVersion {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
