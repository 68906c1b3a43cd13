#[macro_use]
extern crate rocket;

use rocket::data::Limits;
use rocket::{Build, Rocket};

use handler::{
    api_handler::{api_version, ui_config},
    upload_handler::{upload_file, upload_file_not_multipart},
};

use crate::config::{UploadServerConfig, UPLOAD_SERVER_CONFIG};

mod config;
mod handler;
mod logging;
mod model;
mod service;
#[cfg(test)]
mod test;

#[launch]
fn rocket() -> Rocket<Build> {
    let config = UPLOAD_SERVER_CONFIG.clone();
    logging::init_logger(&config.log);
    log::info!(
        "Uploads will be written to {} (sanitize file names: {})",
        config.upload.destination,
        config.upload.sanitize_file_names
    );
    build_rocket(config)
}

/// builds the server from the passed config rather than the global one, that way tests can point uploads at their own directory
pub fn build_rocket(config: UploadServerConfig) -> Rocket<Build> {
    // multipart file parts are bound by both of these, so they need to move together
    let limits = Limits::default()
        .limit("file", config.upload.max_size)
        .limit("data-form", config.upload.max_size);
    let figment = rocket::Config::figment().merge(("limits", limits));
    rocket::custom(figment)
        .manage(config.upload)
        .manage(config.ui)
        .mount(
            "/api",
            routes![
                api_version,
                ui_config,
                upload_file,
                upload_file_not_multipart
            ],
        )
}
