//! Background work for the event loop
//!
//! The only slow operation in the app is reading a photo off disk. It runs
//! on a worker thread and reports back over a crossbeam channel the event
//! loop polls between frames, so rendering never blocks on I/O.

use std::path::Path;

use crossbeam_channel::{bounded, Receiver};
use libhearth::photo::{self, Photo};

/// Result of a photo load, stringified for display in the error overlay.
pub type PhotoResult = std::result::Result<Photo, String>;

/// Read the image at `path` on a worker thread.
///
/// The returned receiver yields exactly one result. Dropping it cancels
/// nothing but makes the result land nowhere, which is fine: the reducer
/// ignores photo results for a torn-down wizard.
pub fn spawn_photo_load(path: String) -> Receiver<PhotoResult> {
    let (tx, rx) = bounded(1);

    std::thread::spawn(move || {
        let result = photo::load(Path::new(&path)).map_err(|e| e.to_string());
        if let Err(ref message) = result {
            tracing::warn!(path, message, "photo load failed");
        }
        let _ = tx.send(result);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_photo_load_delivers_result() {
        let mut file = tempfile::Builder::new()
            .suffix(".jpg")
            .tempfile()
            .expect("temp file");
        file.write_all(&[0xFF, 0xD8, 0xFF]).expect("write");

        let rx = spawn_photo_load(file.path().display().to_string());
        let result = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker reports back");

        let photo = result.expect("load succeeds");
        assert!(photo.data_uri.starts_with("data:image/jpeg;base64,"));
        assert_eq!(photo.byte_len, 3);
    }

    #[test]
    fn test_photo_load_reports_failure_as_string() {
        let rx = spawn_photo_load("/nonexistent/dish.png".to_string());
        let result = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker reports back");

        let message = result.expect_err("load fails");
        assert!(message.contains("Failed to read photo file"));
    }
}
