//! Bulk photo upload orchestration.
//!
//! DESIGN
//! ======
//! Validation and fan-out are pure so they run under `cargo test`; the
//! actual transport is injected as a closure (the uploader component passes
//! `api::upload_photo`). All accepted files are uploaded concurrently and
//! the batch always settles every request: one failed file never cancels
//! the others.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::future::Future;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::StreamExt;
use futures::stream::FuturesUnordered;

/// Largest accepted photo.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const NOT_AN_IMAGE: &str = "Можно загружать только изображения";
pub const TOO_LARGE: &str = "Размер файла не должен превышать 10 МБ";

/// A file picked by the user, with whatever payload the transport needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadCandidate<T> {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub payload: T,
}

/// Check type and size before any request is issued.
///
/// # Errors
///
/// Returns the user-facing rejection message.
pub fn validate_candidate<T>(candidate: &UploadCandidate<T>) -> Result<(), &'static str> {
    if !candidate.mime.starts_with("image/") {
        return Err(NOT_AN_IMAGE);
    }
    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(TOO_LARGE);
    }
    Ok(())
}

/// Encode bytes as a `data:` URL, the format the upload function expects.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadProgress {
    pub completed: usize,
    pub total: usize,
}

impl UploadProgress {
    /// Completion percentage, 0..=100.
    #[must_use]
    pub fn percent(self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.completed * 100 / self.total
    }
}

/// Outcome of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Public URLs in completion order.
    pub uploaded: Vec<String>,
    /// `(file name, message)` for rejected or failed files.
    pub failed: Vec<(String, String)>,
}

impl UploadReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!("Загружено {} из {}", self.uploaded.len(), self.total())
    }
}

/// Validate every candidate, upload the accepted ones concurrently and wait
/// for all of them. `on_progress` fires once before the first request and
/// after each settled upload.
pub async fn upload_all<T, F, Fut, P>(
    candidates: Vec<UploadCandidate<T>>,
    mut upload: F,
    mut on_progress: P,
) -> UploadReport
where
    F: FnMut(UploadCandidate<T>) -> Fut,
    Fut: Future<Output = Result<String, String>>,
    P: FnMut(UploadProgress),
{
    let mut report = UploadReport::default();
    let mut pending = FuturesUnordered::new();

    for candidate in candidates {
        if let Err(message) = validate_candidate(&candidate) {
            log::warn!("upload rejected: {} ({message})", candidate.name);
            report.failed.push((candidate.name, message.to_owned()));
            continue;
        }
        let name = candidate.name.clone();
        let request = upload(candidate);
        pending.push(async move { (name, request.await) });
    }

    let mut progress = UploadProgress { completed: 0, total: pending.len() };
    on_progress(progress);

    while let Some((name, outcome)) = pending.next().await {
        match outcome {
            Ok(url) => report.uploaded.push(url),
            Err(message) => {
                log::warn!("upload failed: {name} ({message})");
                report.failed.push((name, message));
            }
        }
        progress.completed += 1;
        on_progress(progress);
    }

    report
}
