//! Install and uninstall script downloads
//!
//! The script is served from the configured directory when it can be read,
//! otherwise the client is redirected to the copy on GitHub.

use std::path::Path;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const CACHE_CONTROL: &str = "public, max-age=3600";

const RAW_BASE: &str = "https://raw.githubusercontent.com/FoundationINCCorporateTeam/RIFT/main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Install,
    Uninstall,
}

impl ScriptKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ScriptKind::Install => "install.sh",
            ScriptKind::Uninstall => "uninstall.sh",
        }
    }

    pub fn fallback_url(self) -> String {
        format!("{}/{}", RAW_BASE, self.file_name())
    }
}

/// Serves `kind` from `dir`. Any read failure becomes a `302` to the fallback URL.
pub async fn serve_script(dir: &Path, kind: ScriptKind) -> Response {
    let path = dir.join(kind.file_name());

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            debug!(path = %path.display(), bytes = bytes.len(), "serving script");
            let mut response = bytes.into_response();
            let headers = response.headers_mut();
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
            response
        }
        Err(e) => {
            let fallback = kind.fallback_url();
            warn!(path = %path.display(), error = %e, %fallback, "script unavailable, redirecting");
            redirect(&fallback)
        }
    }
}

fn redirect(location: &str) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{}-{}-{}", prefix, std::process::id(), ts));
        std::fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn fallback_urls_point_at_the_repository() {
        assert_eq!(
            ScriptKind::Install.fallback_url(),
            "https://raw.githubusercontent.com/FoundationINCCorporateTeam/RIFT/main/install.sh"
        );
        assert_eq!(
            ScriptKind::Uninstall.fallback_url(),
            "https://raw.githubusercontent.com/FoundationINCCorporateTeam/RIFT/main/uninstall.sh"
        );
    }

    #[tokio::test]
    async fn existing_script_is_served_verbatim() {
        let dir = unique_temp_dir("rift-scripts-ok");
        let script = b"#!/bin/bash\necho \"installing\"\n\xff\n";
        std::fs::write(dir.join("install.sh"), script).expect("failed to write install.sh");

        let response = serve_script(&dir, ScriptKind::Install).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], CONTENT_TYPE);
        assert_eq!(response.headers()[header::CACHE_CONTROL], CACHE_CONTROL);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        assert_eq!(&body[..], &script[..]);
    }

    #[tokio::test]
    async fn missing_script_redirects() {
        let dir = unique_temp_dir("rift-scripts-missing");

        let response = serve_script(&dir, ScriptKind::Uninstall).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            ScriptKind::Uninstall.fallback_url().as_str()
        );
    }

    #[tokio::test]
    async fn unreadable_path_redirects() {
        let dir = unique_temp_dir("rift-scripts-dir");
        // A directory named like the script cannot be read as a file.
        std::fs::create_dir_all(dir.join("install.sh")).expect("failed to create dir");

        let response = serve_script(&dir, ScriptKind::Install).await;
        assert_eq!(response.status(), StatusCode::FOUND);
    }
}
