//! File dialogs and loading, run off the UI thread by `Task::perform`.
//!
//! Results come back as `Result<_, String>`; a dismissed dialog is the
//! error `"Cancelled"`, which the update loop ignores quietly.

use rfd::AsyncFileDialog;
use slate_core::Document;
use std::path::PathBuf;

pub const CANCELLED: &str = "Cancelled";

fn dialog() -> AsyncFileDialog {
    AsyncFileDialog::new()
        .add_filter("Text Files", &["txt"])
        .add_filter("Python Files", &["py"])
        .add_filter("All Files", &["*"])
}

/// Reads `path` into a document.
pub async fn load_document(path: PathBuf) -> Result<Document, String> {
    Document::open(&path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))
}

/// Asks for a file to open, then reads it.
pub async fn pick_and_load() -> Result<Document, String> {
    match dialog().set_title("Open").pick_file().await {
        Some(file) => load_document(file.path().to_path_buf()).await,
        None => Err(CANCELLED.to_string()),
    }
}

/// Asks where to save, suggesting `file_name`.
pub async fn pick_save_path(file_name: String) -> Result<PathBuf, String> {
    match dialog().set_title("Save As").set_file_name(file_name).save_file().await {
        Some(file) => Ok(file.path().to_path_buf()),
        None => Err(CANCELLED.to_string()),
    }
}
