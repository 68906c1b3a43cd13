use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rocket::http::Header;
use rocket::local::blocking::Client;

use crate::build_rocket;
use crate::config::{UploadServerConfig, UPLOAD_SERVER_CONFIG_DEFAULT};


pub static BOUNDARY: &str = "BOUNDARY";

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread
        .name()
        .unwrap_or("unnamed")
        .replace("::", "_")
}

/// a per-test directory under the OS temp dir. The upload destination is `<root>/upload`, which lets tests
/// check what happens one level above it. Everything is removed on drop
pub struct TestDirs {
    pub root: PathBuf,
}

impl TestDirs {
    /// creates the root and the upload destination
    pub fn new() -> TestDirs {
        let dirs = Self::without_destination();
        fs::create_dir_all(dirs.destination()).unwrap();
        dirs
    }

    /// creates only the root, leaving the upload destination missing
    pub fn without_destination() -> TestDirs {
        let root = std::env::temp_dir().join(format!(
            "upload_server_{}_{}_{}",
            std::process::id(),
            current_thread_name(),
            DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::remove_dir_all(&root).unwrap_or(());
        fs::create_dir_all(&root).unwrap();
        TestDirs { root }
    }

    pub fn destination(&self) -> PathBuf {
        self.root.join("upload")
    }

    pub fn uploaded(&self, file_name: &str) -> PathBuf {
        self.destination().join(file_name)
    }

    pub fn config(&self) -> UploadServerConfig {
        let mut config = UPLOAD_SERVER_CONFIG_DEFAULT.clone();
        config.upload.destination = self.destination().to_string_lossy().to_string();
        config
    }

    pub fn client(&self) -> Client {
        client_with(self.config())
    }

    /// names of everything in the upload destination
    pub fn stored_files(&self) -> Vec<String> {
        match fs::read_dir(self.destination()) {
            Ok(entries) => entries
                .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Drop for TestDirs {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.root).unwrap_or(());
    }
}

pub fn client_with(config: UploadServerConfig) -> Client {
    Client::tracked(build_rocket(config)).unwrap()
}

pub fn multipart_header() -> Header<'static> {
    Header::new(
        "Content-Type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
}

/// builds a multipart body with a single part
pub fn multipart_body(
    field_name: &str,
    file_name: Option<&str>,
    content_type: Option<&str>,
    contents: &[u8],
) -> Vec<u8> {
    let mut disposition = format!("Content-Disposition: form-data; name=\"{field_name}\"");
    if let Some(file_name) = file_name {
        disposition.push_str(&format!("; filename=\"{file_name}\""));
    }
    let mut body = format!("--{BOUNDARY}\r\n{disposition}\r\n").into_bytes();
    if let Some(content_type) = content_type {
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// a multipart body carrying `contents` in the `file` field
pub fn file_body(file_name: &str, content_type: &str, contents: &[u8]) -> Vec<u8> {
    multipart_body("file", Some(file_name), Some(content_type), contents)
}
