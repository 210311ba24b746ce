//! Profile Picture Loading
//!
//! Reads an image file off the UI thread and converts it into an
//! embeddable `data:` URI. Completions come back over an mpsc channel
//! that the UI drains every frame. Concurrent loads race: results are
//! applied in arrival order, so the last load to *complete* wins, which
//! is not necessarily the last one started.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use base64::Engine;
use thiserror::Error;

/// Failure while turning a file into a picture. Surfaced inline on the
/// signup form, never fatal.
#[derive(Debug, Error)]
pub enum PictureError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A successfully converted picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPicture {
    pub file_name: String,
    pub data_uri: String,
    pub byte_len: usize,
}

pub type PictureResult = Result<LoadedPicture, PictureError>;

/// Channel pair owned by the application state. Worker threads push
/// completions; the UI polls with [`PictureChannel::try_recv`].
pub struct PictureChannel {
    tx: Sender<PictureResult>,
    rx: Receiver<PictureResult>,
}

impl Default for PictureChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl PictureChannel {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Start reading `path` on a worker thread. Returns immediately;
    /// the completion arrives through [`PictureChannel::try_recv`].
    pub fn start_load(&self, path: PathBuf) {
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let result = load_picture(&path);
            // The receiver may be gone during shutdown.
            let _ = tx.send(result);
        });
    }

    /// Next completed load, if any arrived since the last poll.
    pub fn try_recv(&self) -> Option<PictureResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Blocking read + encode, run on a worker thread.
fn load_picture(path: &Path) -> PictureResult {
    let bytes = std::fs::read(path).map_err(|source| PictureError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    tracing::debug!(file = %file_name, bytes = bytes.len(), "picture converted");
    Ok(LoadedPicture {
        file_name,
        byte_len: bytes.len(),
        data_uri: encode_data_uri(mime_for(path), &bytes),
    })
}

/// `data:<mime>;base64,<payload>` representation of raw bytes.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Media type guessed from the file extension. No type validation is
/// performed; unknown extensions fall back to an opaque type.
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
