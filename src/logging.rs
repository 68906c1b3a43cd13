use std::str::FromStr;
use std::time::SystemTime;

use log::LevelFilter;

use crate::config::LogConfig;

/// installs the global logger. Lines look like `[2024-01-01T00:00:00Z INFO upload_server] message`
pub fn init_logger(config: &LogConfig) {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(parse_level(&config.level))
        .chain(std::io::stdout());
    if let Some(file) = &config.file {
        match fern::log_file(file) {
            Ok(log_file) => dispatch = dispatch.chain(log_file),
            Err(e) => eprintln!("Failed to open log file {file}, only logging to stdout: {e}"),
        }
    }
    // a logger being set already isn't worth crashing over
    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to install logger: {e}");
    }
}

fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, defaulting to info");
        LevelFilter::Info
    })
}
