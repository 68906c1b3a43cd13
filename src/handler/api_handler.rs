use rocket::serde::json::Json;
use rocket::State;

use crate::config::UiConfig;
use crate::model::response::api_responses::ApiVersion;

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion::current())
}

/// hands the front end its module list and color mode settings. These are read once at startup and never change
#[get("/ui")]
pub fn ui_config(ui: &State<UiConfig>) -> Json<UiConfig> {
    Json(ui.inner().clone())
}
