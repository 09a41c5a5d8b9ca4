//! Serves the built frontend from the configured static directory.
//!
//! Unknown paths fall back to `index.html` so client-side navigation keeps
//! working. Paths leaving the static directory are refused.

use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{error, web, HttpRequest, Result};

use crate::config::ServerConfig;

const INDEX: &str = "index.html";

pub async fn process(req: HttpRequest, config: web::Data<ServerConfig>) -> Result<NamedFile> {
    let path = resolve(&config.static_dir, req.path()).ok_or_else(|| {
        log::warn!("Refused asset path {}", req.path());
        error::ErrorNotFound("Not Found")
    })?;
    Ok(NamedFile::open_async(path).await?)
}

/// Maps a request path to a file below `root`. Returns `None` for paths that
/// try to escape `root`; missing files resolve to `root/index.html`.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if relative
        .components()
        .any(|part| !matches!(part, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    let candidate = root.join(relative);
    if candidate.is_file() {
        Some(candidate)
    } else {
        Some(root.join(INDEX))
    }
}
