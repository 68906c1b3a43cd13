use std::path::Path;

use config::{Config, ConfigError, Environment};
use once_cell::sync::Lazy;
use rocket::data::{ByteUnit, ToByteUnit};
use rocket::serde::{Deserialize, Serialize};

/// where uploaded files go and how they are accepted
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct UploadConfig {
    /// directory that uploads are written to. This is never created by the server
    pub destination: String,
    #[serde(rename = "maxsize")]
    pub max_size: ByteUnit,
    /// when false, the client's file name is used as-is
    #[serde(rename = "sanitizefilenames")]
    pub sanitize_file_names: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ColorModeConfig {
    /// the default theme
    pub preference: String,
    /// attribute set on the `<html>` tag, as `data-<value>`
    #[serde(rename(deserialize = "datavalue", serialize = "dataValue"))]
    pub data_value: String,
    #[serde(rename(deserialize = "classsuffix", serialize = "classSuffix"))]
    pub class_suffix: String,
}

/// declarative front end settings. Nothing server side acts on these, they're only handed out
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct UiConfig {
    pub modules: Vec<String>,
    #[serde(rename(deserialize = "colormode", serialize = "colorMode"))]
    pub color_mode: ColorModeConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct LogConfig {
    pub level: String,
    /// if set, logs are appended to this file in addition to stdout
    pub file: Option<String>,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct UploadServerConfig {
    pub upload: UploadConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

static CONFIG_FILE: &str = "./UploadServer.toml";

/// `UPLOAD_SERVER_UPLOAD__DESTINATION=/srv/upload` sets `upload.destination`
fn environment() -> Environment {
    Environment::with_prefix("UPLOAD_SERVER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Parses the config file located at ./UploadServer.toml, if it exists, and layers `UPLOAD_SERVER_*`
/// environment variables on top of it. Anything set in neither falls back to [`UPLOAD_SERVER_CONFIG_DEFAULT`].
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> UploadServerConfig {
    match load_config(CONFIG_FILE, environment()) {
        Ok(config) => config,
        // basically everything is unrecoverable here
        Err(e) => {
            log::error!("Failed to parse config file. Exception is {e}");
            panic!("Failed to parse config file. Exception is {e}");
        }
    }
}

fn load_config(file: &str, env: Environment) -> Result<UploadServerConfig, ConfigError> {
    // a missing file is fine, the environment and defaults still apply
    if !Path::new(file).exists() {
        log::warn!("No config file found. Continuing startup...");
    }
    let defaults = &*UPLOAD_SERVER_CONFIG_DEFAULT;
    let settings = Config::builder()
        .set_default("upload.destination", defaults.upload.destination.clone())?
        .set_default("upload.maxsize", defaults.upload.max_size.as_u64() as i64)?
        .set_default("upload.sanitizefilenames", defaults.upload.sanitize_file_names)?
        .set_default("ui.modules", defaults.ui.modules.clone())?
        .set_default("ui.colormode.preference", defaults.ui.color_mode.preference.clone())?
        .set_default("ui.colormode.datavalue", defaults.ui.color_mode.data_value.clone())?
        .set_default("ui.colormode.classsuffix", defaults.ui.color_mode.class_suffix.clone())?
        .set_default("log.level", defaults.log.level.clone())?
        .add_source(config::File::with_name(file).required(false))
        .add_source(env)
        .build()?;
    Ok(settings.try_deserialize().unwrap_or_else(|e| {
        log::warn!("Config file could not be mapped ({e}), falling back to defaults");
        defaults.clone()
    }))
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static UPLOAD_SERVER_CONFIG: Lazy<UploadServerConfig> = Lazy::new(parse_config);
pub static UPLOAD_SERVER_CONFIG_DEFAULT: Lazy<UploadServerConfig> =
    Lazy::new(|| UploadServerConfig {
        upload: UploadConfig {
            destination: "upload".to_string(),
            max_size: 64.mebibytes(),
            sanitize_file_names: false,
        },
        ui: UiConfig {
            modules: vec![
                "@nuxtjs/tailwindcss".to_string(),
                "@nuxtjs/color-mode".to_string(),
            ],
            color_mode: ColorModeConfig {
                preference: "system".to_string(),
                data_value: "theme".to_string(),
                class_suffix: "".to_string(),
            },
        },
        log: LogConfig {
            level: "info".to_string(),
            file: None,
        },
    });
