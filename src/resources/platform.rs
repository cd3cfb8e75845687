//! Host services reached by resource actions.

use crate::resources::error::PlatformError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Services a host provides for resource actions.
///
/// Implement this over the real environment (browser, desktop, terminal)
/// or over an in-memory recorder in tests.
pub trait Platform {
    /// Offer `content` to the user as a file named `filename`.
    fn save_file(
        &mut self,
        filename: &str,
        media_type: &str,
        content: &[u8],
    ) -> Result<(), PlatformError>;

    /// Replace the clipboard contents.
    fn write_clipboard(&mut self, text: &str) -> Result<(), PlatformError>;

    /// Open (or download) a static document.
    fn open_link(&mut self, href: &str, filename: Option<&str>) -> Result<(), PlatformError>;

    /// Show a short confirmation message.
    fn notify(&mut self, _message: &str) -> Result<(), PlatformError> {
        Ok(())
    }
}

/// Platform backed by a local directory.
///
/// Downloads become files under `root`. Clipboard text, opened links and
/// notifications are kept in memory for the host to present.
#[derive(Debug, Clone)]
pub struct DirectoryPlatform {
    root: PathBuf,
    clipboard: Option<String>,
    opened_links: Vec<String>,
    notifications: Vec<String>,
}

impl DirectoryPlatform {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            clipboard: None,
            opened_links: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn opened_links(&self) -> &[String] {
        &self.opened_links
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl Platform for DirectoryPlatform {
    fn save_file(
        &mut self,
        filename: &str,
        media_type: &str,
        content: &[u8],
    ) -> Result<(), PlatformError> {
        let is_bare_name = Path::new(filename)
            .file_name()
            .is_some_and(|name| name == filename);
        if !is_bare_name {
            return Err(PlatformError::InvalidFilename {
                filename: filename.to_string(),
            });
        }

        fs::create_dir_all(&self.root)?;
        let path = self.root.join(filename);
        fs::write(&path, content)?;

        info!(path = %path.display(), media_type, bytes = content.len(), "file saved");
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), PlatformError> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn open_link(&mut self, href: &str, filename: Option<&str>) -> Result<(), PlatformError> {
        info!(href, filename, "link opened");
        self.opened_links.push(href.to_string());
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), PlatformError> {
        self.notifications.push(message.to_string());
        Ok(())
    }
}
