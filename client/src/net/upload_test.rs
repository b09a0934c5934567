use super::*;

use futures::executor::block_on;

fn candidate(name: &str, mime: &str, size: u64) -> UploadCandidate<u8> {
    UploadCandidate { name: name.to_owned(), mime: mime.to_owned(), size, payload: 0 }
}

#[test]
fn validate_rejects_non_images() {
    assert_eq!(validate_candidate(&candidate("a.pdf", "application/pdf", 10)), Err(NOT_AN_IMAGE));
}

#[test]
fn validate_rejects_oversized_files() {
    assert_eq!(validate_candidate(&candidate("a.jpg", "image/jpeg", MAX_UPLOAD_BYTES + 1)), Err(TOO_LARGE));
    assert_eq!(validate_candidate(&candidate("b.jpg", "image/jpeg", MAX_UPLOAD_BYTES)), Ok(()));
}

#[test]
fn data_url_encodes_base64() {
    assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
}

#[test]
fn progress_percent_handles_empty_batch() {
    assert_eq!(UploadProgress { completed: 0, total: 0 }.percent(), 100);
    assert_eq!(UploadProgress { completed: 1, total: 4 }.percent(), 25);
}

#[test]
fn upload_all_tolerates_partial_failure() {
    let files = vec![
        candidate("ok1.jpg", "image/jpeg", 100),
        candidate("bad.jpg", "image/jpeg", 100),
        candidate("doc.txt", "text/plain", 100),
        candidate("ok2.png", "image/png", 100),
    ];
    let mut seen = Vec::new();
    let report = block_on(upload_all(
        files,
        |c| async move {
            if c.name == "bad.jpg" { Err("HTTP 500".to_owned()) } else { Ok(format!("https://cdn/{}", c.name)) }
        },
        |p| seen.push(p),
    ));

    let mut uploaded = report.uploaded.clone();
    uploaded.sort();
    assert_eq!(uploaded, vec!["https://cdn/ok1.jpg".to_owned(), "https://cdn/ok2.png".to_owned()]);
    assert!(report.failed.contains(&("bad.jpg".to_owned(), "HTTP 500".to_owned())));
    assert!(report.failed.contains(&("doc.txt".to_owned(), NOT_AN_IMAGE.to_owned())));
    assert_eq!(report.summary(), "Загружено 2 из 4");

    assert_eq!(seen.first(), Some(&UploadProgress { completed: 0, total: 3 }));
    assert_eq!(seen.last(), Some(&UploadProgress { completed: 3, total: 3 }));
    assert_eq!(seen.len(), 4);
}

#[test]
fn upload_all_with_only_rejections_issues_no_requests() {
    let mut calls = 0;
    let report = block_on(upload_all(
        vec![candidate("huge.jpg", "image/jpeg", MAX_UPLOAD_BYTES * 2)],
        |_c: UploadCandidate<u8>| {
            calls += 1;
            async { Ok(String::new()) }
        },
        |_| {},
    ));
    assert_eq!(calls, 0);
    assert_eq!(report.summary(), "Загружено 0 из 1");
}

#[test]
fn fast_failure_does_not_drop_slow_upload() {
    let (release, gate) = futures::channel::oneshot::channel::<()>();
    let mut gate = Some(gate);
    let mut release = Some(release);
    let mut seen = Vec::new();

    let report = block_on(upload_all(
        vec![candidate("slow.jpg", "image/jpeg", 100), candidate("bad.jpg", "image/jpeg", 100)],
        |c| {
            let wait = if c.name == "slow.jpg" { gate.take() } else { None };
            async move {
                match wait {
                    Some(wait) => match wait.await {
                        Ok(()) => Ok(format!("https://cdn/{}", c.name)),
                        Err(_) => Err("cancelled".to_owned()),
                    },
                    None => Err("HTTP 500".to_owned()),
                }
            }
        },
        |p| {
            seen.push(p);
            // The slow upload only finishes once the failure has settled.
            if p.completed == 1 {
                if let Some(tx) = release.take() {
                    let _ = tx.send(());
                }
            }
        },
    ));

    assert_eq!(report.failed, vec![("bad.jpg".to_owned(), "HTTP 500".to_owned())]);
    assert_eq!(report.uploaded, vec!["https://cdn/slow.jpg".to_owned()]);
    assert_eq!(seen.last(), Some(&UploadProgress { completed: 2, total: 2 }));
}
